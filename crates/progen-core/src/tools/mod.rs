//! Tool gating: verify required external tools, installing them when allowed.
//!
//! Before a generator scaffolds anything it runs a gate per required tool:
//! probe the tool, and if it is missing either resolve an installation path
//! through the host's package managers (in a fixed per-OS priority order)
//! or print every known way to acquire it.

pub mod catalog;
pub mod gate;
pub mod manager;
pub mod resolver;
pub mod spec;

pub use gate::ToolGate;
pub use manager::PackageManager;
pub use resolver::{resolve, Resolution, ToolError};
pub use spec::{InstallSpec, ToolSpec};

use std::fmt;

/// Host operating-system family.
///
/// Detected once at startup but always passed explicitly into the resolver,
/// so all three branches are exercisable from one test process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    /// Detect the family of the running host. Anything that is neither
    /// Windows nor macOS is treated as Linux, as the package-manager set
    /// (apt/dnf/yum/pacman) is the useful distinction here.
    pub fn detect() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else {
            OsFamily::Linux
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "GNU/Linux",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
