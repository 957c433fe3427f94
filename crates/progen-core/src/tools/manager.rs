//! OS package managers known to the installer.

use super::OsFamily;
use std::fmt;

/// An OS-level package manager capable of installing named packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Scoop,
    Choco,
    Winget,
    Brew,
    Apt,
    Dnf,
    Yum,
    Pacman,
}

/// Fixed candidate order per OS. The first eligible manager wins; the order
/// is absolute and never reordered by availability or cache state.
const WINDOWS_PRIORITY: &[PackageManager] = &[
    PackageManager::Scoop,
    PackageManager::Choco,
    PackageManager::Winget,
];
const MACOS_PRIORITY: &[PackageManager] = &[PackageManager::Brew];
const LINUX_PRIORITY: &[PackageManager] = &[
    PackageManager::Apt,
    PackageManager::Dnf,
    PackageManager::Yum,
    PackageManager::Pacman,
];

impl PackageManager {
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Scoop => "scoop",
            PackageManager::Choco => "chocolatey",
            PackageManager::Winget => "winget",
            PackageManager::Brew => "homebrew",
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Pacman => "pacman",
        }
    }

    /// Command probed to decide whether this manager itself is usable.
    pub fn probe_command(&self) -> &'static str {
        match self {
            PackageManager::Scoop => "scoop help",
            PackageManager::Choco => "choco --version",
            PackageManager::Winget => "winget --version",
            PackageManager::Brew => "brew --version",
            PackageManager::Apt => "apt-get --help",
            PackageManager::Dnf => "dnf --help",
            PackageManager::Yum => "yum help",
            PackageManager::Pacman => "pacman -S --help",
        }
    }

    /// Commands run once before any install through this manager,
    /// regardless of the update flag.
    pub fn prepare_commands(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Scoop => &["scoop bucket add extras"],
            _ => &[],
        }
    }

    /// Best-effort "update all installed packages" commands, guarded by the
    /// tool's `update_package_manager` flag. Failures are logged, not fatal.
    pub fn update_commands(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Scoop => &["scoop update", "scoop update *"],
            PackageManager::Choco => &["choco upgrade chocolatey", "choco outdated"],
            PackageManager::Winget => &[],
            PackageManager::Brew => &["brew update", "brew upgrade"],
            PackageManager::Apt => &["sudo apt-get update", "sudo apt-get upgrade"],
            PackageManager::Dnf => &["sudo dnf upgrade"],
            PackageManager::Yum => &["sudo yum update", "sudo yum upgrade"],
            PackageManager::Pacman => &["pacman -Syu"],
        }
    }

    /// Command that installs the manager itself when it is absent.
    /// Only Homebrew supports this bootstrap.
    pub fn bootstrap_command(&self) -> Option<&'static str> {
        match self {
            PackageManager::Brew => Some(
                "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/master/install.sh)\"",
            ),
            _ => None,
        }
    }

    /// Candidate managers for an OS family, highest priority first.
    pub fn priority(os: OsFamily) -> &'static [PackageManager] {
        match os {
            OsFamily::Windows => WINDOWS_PRIORITY,
            OsFamily::MacOs => MACOS_PRIORITY,
            OsFamily::Linux => LINUX_PRIORITY,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
