//! Tool requirements and their per-OS installation descriptors.

use super::manager::PackageManager;
use super::OsFamily;

/// Ways to acquire a tool on one OS family: package-manager install
/// commands, an optional generic shell command, and an optional manual
/// download link.
///
/// A spec with none of these is unresolvable; the resolver reports the tool
/// as unsupported on that OS.
#[derive(Debug, Clone, Default)]
pub struct InstallSpec {
    commands: Vec<(PackageManager, String)>,
    shell_command: Option<String>,
    download_link: Option<String>,
}

impl InstallSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an install command for a package manager. Insertion order is
    /// irrelevant: candidate selection always follows the OS priority order.
    pub fn manager(mut self, manager: PackageManager, command: &str) -> Self {
        self.commands.push((manager, command.to_string()));
        self
    }

    /// Set the generic shell command fallback.
    pub fn shell(mut self, command: &str) -> Self {
        self.shell_command = Some(command.to_string());
        self
    }

    /// Set the manual download link fallback.
    pub fn link(mut self, url: &str) -> Self {
        self.download_link = Some(url.to_string());
        self
    }

    /// The configured install command for a manager, if any.
    pub fn command_for(&self, manager: PackageManager) -> Option<&str> {
        self.commands
            .iter()
            .find(|(m, _)| *m == manager)
            .map(|(_, cmd)| cmd.as_str())
    }

    pub fn shell_command(&self) -> Option<&str> {
        self.shell_command.as_deref()
    }

    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref()
    }

    /// Whether any acquisition path is configured at all.
    pub fn is_resolvable(&self) -> bool {
        !self.commands.is_empty() || self.shell_command.is_some() || self.download_link.is_some()
    }
}

/// A required external tool: how to probe for it and how to acquire it on
/// each OS family.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name used in messages (e.g. "gcc").
    pub name: &'static str,
    /// Command probed to decide whether the tool is usable.
    pub probe_command: String,
    /// Run the chosen manager's update commands before installing.
    pub update_package_manager: bool,
    pub windows: InstallSpec,
    pub macos: InstallSpec,
    pub linux: InstallSpec,
}

impl ToolSpec {
    pub fn new(name: &'static str, probe_command: &str) -> Self {
        Self {
            name,
            probe_command: probe_command.to_string(),
            update_package_manager: true,
            windows: InstallSpec::new(),
            macos: InstallSpec::new(),
            linux: InstallSpec::new(),
        }
    }

    pub fn windows(mut self, spec: InstallSpec) -> Self {
        self.windows = spec;
        self
    }

    pub fn macos(mut self, spec: InstallSpec) -> Self {
        self.macos = spec;
        self
    }

    pub fn linux(mut self, spec: InstallSpec) -> Self {
        self.linux = spec;
        self
    }

    pub fn update_package_manager(mut self, update: bool) -> Self {
        self.update_package_manager = update;
        self
    }

    /// The installation descriptor for an OS family.
    pub fn for_os(&self, os: OsFamily) -> &InstallSpec {
        match os {
            OsFamily::Windows => &self.windows,
            OsFamily::MacOs => &self.macos,
            OsFamily::Linux => &self.linux,
        }
    }
}
