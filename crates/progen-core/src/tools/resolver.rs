//! Installer resolution: decide, per OS, how a missing tool gets installed.
//!
//! The resolver walks a fixed per-OS priority order of package managers and
//! takes the first one that is both configured for the tool and present on
//! the host. When installation is not allowed it only enumerates the known
//! acquisition paths and executes nothing.

use super::manager::PackageManager;
use super::spec::ToolSpec;
use super::OsFamily;
use crate::shell::Shell;
use colored::Colorize;
use std::io;
use thiserror::Error;

/// Terminal failures of the tool gate.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool is missing and no install path exists, was permitted,
    /// or succeeded. Fatal for the project being generated.
    #[error("`{tool}` is not available and could not be installed")]
    Unavailable { tool: String },

    /// Only a GUI/manual installer exists; the process cannot continue
    /// unattended.
    #[error("`{tool}` must be installed manually from {link}")]
    ManualInstallRequired { tool: String, link: String },

    /// Nothing is configured for this tool on this OS.
    #[error("no known way to install `{tool}` on {os}")]
    Unsupported { tool: String, os: OsFamily },

    #[error("failed to run `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// How a tool requirement was satisfied (or advised upon).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The tool's own probe succeeded; nothing else was touched.
    Present,
    /// Installed through a package manager and verified by re-probe.
    Installed { manager: PackageManager },
    /// Installed through the generic shell command and verified by re-probe.
    InstalledViaShell,
    /// Installation was not allowed; the listed acquisition paths were
    /// printed and nothing was executed.
    Advisory { paths: Vec<String> },
}

/// Resolve a tool requirement.
///
/// Probing the tool itself short-circuits everything: a present tool causes
/// no package-manager probing and no install attempt.
pub fn resolve(
    tool: &ToolSpec,
    os: OsFamily,
    allow_install: bool,
    shell: &dyn Shell,
) -> Result<Resolution, ToolError> {
    if shell.probe(&tool.probe_command) {
        return Ok(Resolution::Present);
    }

    if allow_install {
        install(tool, os, shell)
    } else {
        Ok(advise(tool, os, shell))
    }
}

/// Run a command whose exit code matters, mapping spawn failures to `Io`.
fn must_run(shell: &dyn Shell, command: &str) -> Result<i32, ToolError> {
    shell.run_streamed(command, None).map_err(|source| ToolError::Io {
        command: command.to_string(),
        source,
    })
}

fn install(tool: &ToolSpec, os: OsFamily, shell: &dyn Shell) -> Result<Resolution, ToolError> {
    let spec = tool.for_os(os);

    for &manager in PackageManager::priority(os) {
        let Some(install_cmd) = spec.command_for(manager) else {
            continue;
        };

        let mut available = shell.probe(manager.probe_command());
        if !available {
            // Homebrew can bootstrap itself; other absent managers are skipped.
            if let Some(bootstrap) = manager.bootstrap_command() {
                println!(
                    "{} is not installed, bootstrapping it first...",
                    manager.display_name()
                );
                must_run(shell, bootstrap)?;
                available = shell.probe(manager.probe_command());
            }
        }
        if !available {
            continue;
        }

        for prepare in manager.prepare_commands() {
            shell.best_effort(prepare);
        }
        if tool.update_package_manager {
            for update in manager.update_commands() {
                shell.best_effort(update);
            }
        }

        let code = must_run(shell, install_cmd)?;
        if code != 0 {
            eprintln!(
                "{}",
                format!("Installing `{}` via {} failed (exit {})", tool.name, manager, code).red()
            );
            return Err(ToolError::Unavailable {
                tool: tool.name.to_string(),
            });
        }
        return verify_installed(tool, shell, Resolution::Installed { manager });
    }

    if let Some(command) = spec.shell_command() {
        let code = must_run(shell, command)?;
        if code != 0 {
            eprintln!(
                "{}",
                format!("Installing `{}` via `{}` failed (exit {})", tool.name, command, code)
                    .red()
            );
            return Err(ToolError::Unavailable {
                tool: tool.name.to_string(),
            });
        }
        return verify_installed(tool, shell, Resolution::InstalledViaShell);
    }

    if let Some(link) = spec.download_link() {
        println!(
            "Download the file at this link: {} and put the resulting binary in your {} environment variable",
            link.underline(),
            "PATH".bold()
        );
        return Err(ToolError::ManualInstallRequired {
            tool: tool.name.to_string(),
            link: link.to_string(),
        });
    }

    eprintln!(
        "{}",
        format!(
            "You cannot install `{}` automatically: it isn't referenced for {}",
            tool.name, os
        )
        .red()
    );
    Err(ToolError::Unsupported {
        tool: tool.name.to_string(),
        os,
    })
}

/// Re-probe after an automated install. The install command exiting 0 is not
/// proof the tool is usable (it may not be on PATH in this shell yet), so a
/// second failed probe is still `Unavailable`.
fn verify_installed(
    tool: &ToolSpec,
    shell: &dyn Shell,
    resolution: Resolution,
) -> Result<Resolution, ToolError> {
    if shell.probe(&tool.probe_command) {
        println!("{}", format!("`{}` is now installed", tool.name).green());
        Ok(resolution)
    } else {
        eprintln!(
            "{}",
            format!(
                "Installed `{}` (exit 0) but its probe still fails; you may need to restart your shell",
                tool.name
            )
            .red()
        );
        Err(ToolError::Unavailable {
            tool: tool.name.to_string(),
        })
    }
}

/// Enumerate every configured acquisition path without executing anything.
/// This path never fails; the caller decides whether absence is fatal.
fn advise(tool: &ToolSpec, os: OsFamily, shell: &dyn Shell) -> Resolution {
    let spec = tool.for_os(os);
    let mut paths = Vec::new();

    if let Some(link) = spec.download_link() {
        paths.push(format!(
            "Download the file at this link: {} and put the resulting binary in your PATH",
            link
        ));
    }
    if let Some(command) = spec.shell_command() {
        paths.push(format!("Launch the following command: {}", command));
    }
    for &manager in PackageManager::priority(os) {
        if let Some(command) = spec.command_for(manager) {
            if shell.probe(manager.probe_command()) {
                paths.push(format!(
                    "Launch the following command: {} (via {})",
                    command, manager
                ));
            }
        }
    }

    if paths.is_empty() {
        println!(
            "{}",
            format!("There is no known way to install `{}` on {}", tool.name, os).red()
        );
    } else {
        println!("`{}` is missing. You can install it from multiple ways:", tool.name);
        for path in &paths {
            println!("\t- {}", path);
        }
    }

    Resolution::Advisory { paths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedShell;
    use crate::tools::spec::InstallSpec;

    fn gcc() -> ToolSpec {
        crate::tools::catalog::gcc()
    }

    #[test]
    fn present_tool_short_circuits_all_probing() {
        let shell = ScriptedShell::new().succeeds("gcc --version");
        let result = resolve(&gcc(), OsFamily::Linux, true, &shell).unwrap();
        assert_eq!(result, Resolution::Present);
        // Only the tool's own probe ran: no manager probing, no installs.
        assert_eq!(shell.probed(), vec!["gcc --version"]);
        assert!(shell.executed().is_empty());
    }

    #[test]
    fn linux_apt_install_runs_update_upgrade_install_in_order() {
        let shell = ScriptedShell::new()
            .succeeds("apt-get --help")
            .probe_sequence("gcc --version", &[false, true]);
        let result = resolve(&gcc(), OsFamily::Linux, true, &shell).unwrap();
        assert_eq!(
            result,
            Resolution::Installed {
                manager: PackageManager::Apt
            }
        );
        assert_eq!(
            shell.executed(),
            vec![
                "sudo apt-get update",
                "sudo apt-get upgrade",
                "sudo apt-get install build-essential",
            ]
        );
    }

    #[test]
    fn install_success_with_failed_reprobe_is_unavailable() {
        let shell = ScriptedShell::new().succeeds("apt-get --help");
        let err = resolve(&gcc(), OsFamily::Linux, true, &shell).unwrap_err();
        assert!(matches!(err, ToolError::Unavailable { .. }));
    }

    #[test]
    fn install_reports_success_when_reprobe_passes() {
        let tool = ToolSpec::new("mytool", "mytool --version")
            .update_package_manager(false)
            .linux(InstallSpec::new().manager(PackageManager::Apt, "sudo apt-get install mytool"));
        let shell = ScriptedShell::new()
            .succeeds("apt-get --help")
            .probe_sequence("mytool --version", &[false, true]);
        let result = resolve(&tool, OsFamily::Linux, true, &shell).unwrap();
        assert_eq!(
            result,
            Resolution::Installed {
                manager: PackageManager::Apt
            }
        );
        assert_eq!(shell.executed(), vec!["sudo apt-get install mytool"]);
    }

    #[test]
    fn priority_order_is_absolute_among_available_managers() {
        // dnf and pacman are both available; apt is not. dnf must win
        // because it comes first in the fixed Linux order, regardless of
        // the configuration insertion order (pacman was inserted first).
        let tool = ToolSpec::new("tool", "tool --version")
            .update_package_manager(false)
            .linux(
                InstallSpec::new()
                    .manager(PackageManager::Pacman, "sudo pacman -S tool")
                    .manager(PackageManager::Dnf, "sudo dnf install tool"),
            );
        let shell = ScriptedShell::new()
            .succeeds("dnf --help")
            .succeeds("pacman -S --help");
        let _ = resolve(&tool, OsFamily::Linux, true, &shell);
        assert_eq!(shell.executed(), vec!["sudo dnf install tool"]);
    }

    #[test]
    fn unavailable_managers_are_skipped() {
        let tool = ToolSpec::new("tool", "tool --version")
            .update_package_manager(false)
            .linux(
                InstallSpec::new()
                    .manager(PackageManager::Apt, "sudo apt-get install tool")
                    .manager(PackageManager::Yum, "sudo yum install tool"),
            );
        let shell = ScriptedShell::new().succeeds("yum help");
        let _ = resolve(&tool, OsFamily::Linux, true, &shell);
        assert_eq!(shell.executed(), vec!["sudo yum install tool"]);
    }

    #[test]
    fn update_flag_off_skips_manager_update_commands() {
        let tool = ToolSpec::new("tool", "tool --version")
            .update_package_manager(false)
            .linux(InstallSpec::new().manager(PackageManager::Apt, "sudo apt-get install tool"));
        let shell = ScriptedShell::new().succeeds("apt-get --help");
        let _ = resolve(&tool, OsFamily::Linux, true, &shell);
        assert_eq!(shell.executed(), vec!["sudo apt-get install tool"]);
    }

    #[test]
    fn update_commands_run_exactly_once_before_install() {
        let tool = ToolSpec::new("tool", "tool --version")
            .linux(InstallSpec::new().manager(PackageManager::Dnf, "sudo dnf install tool"));
        let shell = ScriptedShell::new().succeeds("dnf --help");
        let _ = resolve(&tool, OsFamily::Linux, true, &shell);
        assert_eq!(
            shell.executed(),
            vec!["sudo dnf upgrade", "sudo dnf install tool"]
        );
    }

    #[test]
    fn scoop_prepare_runs_even_without_update_flag() {
        let tool = ToolSpec::new("tool", "tool --version")
            .update_package_manager(false)
            .windows(InstallSpec::new().manager(PackageManager::Scoop, "scoop install tool"));
        let shell = ScriptedShell::new().succeeds("scoop help");
        let _ = resolve(&tool, OsFamily::Windows, true, &shell);
        assert_eq!(
            shell.executed(),
            vec!["scoop bucket add extras", "scoop install tool"]
        );
    }

    #[test]
    fn failed_install_command_is_unavailable() {
        let tool = ToolSpec::new("tool", "tool --version")
            .update_package_manager(false)
            .linux(InstallSpec::new().manager(PackageManager::Apt, "sudo apt-get install tool"));
        let shell = ScriptedShell::new()
            .succeeds("apt-get --help")
            .exec_fails("sudo apt-get install tool", 100);
        let err = resolve(&tool, OsFamily::Linux, true, &shell).unwrap_err();
        assert!(matches!(err, ToolError::Unavailable { .. }));
    }

    #[test]
    fn generic_shell_command_used_when_no_manager_available() {
        let tool = ToolSpec::new("deno", "deno --version")
            .linux(InstallSpec::new().shell("curl -fsSL https://deno.land/x/install/install.sh | sh"));
        let shell = ScriptedShell::new();
        let err = resolve(&tool, OsFamily::Linux, true, &shell).unwrap_err();
        // Re-probe after the shell install still fails in the scripted shell.
        assert!(matches!(err, ToolError::Unavailable { .. }));
        assert_eq!(
            shell.executed(),
            vec!["curl -fsSL https://deno.land/x/install/install.sh | sh"]
        );
    }

    #[test]
    fn manual_link_is_terminal() {
        let tool = ToolSpec::new("flutter", "flutter --version")
            .linux(InstallSpec::new().link("https://flutter.dev/docs/get-started/install/linux"));
        let shell = ScriptedShell::new();
        let err = resolve(&tool, OsFamily::Linux, true, &shell).unwrap_err();
        assert!(matches!(err, ToolError::ManualInstallRequired { .. }));
        assert!(shell.executed().is_empty());
    }

    #[test]
    fn nothing_configured_is_unsupported() {
        let tool = ToolSpec::new("mystery", "mystery --version");
        let shell = ScriptedShell::new();
        let err = resolve(&tool, OsFamily::Linux, true, &shell).unwrap_err();
        assert!(matches!(err, ToolError::Unsupported { .. }));
        assert!(shell.executed().is_empty());
    }

    #[test]
    fn advisory_executes_nothing() {
        let shell = ScriptedShell::new()
            .succeeds("apt-get --help")
            .succeeds("pacman -S --help");
        let result = resolve(&gcc(), OsFamily::Linux, false, &shell).unwrap();
        let Resolution::Advisory { paths } = result else {
            panic!("expected advisory");
        };
        // apt and pacman are available so their commands are listed; dnf and
        // yum are not. No install or update command ever ran.
        assert!(paths.iter().any(|p| p.contains("build-essential")));
        assert!(paths.iter().any(|p| p.contains("pacman -S gcc")));
        assert!(!paths.iter().any(|p| p.contains("dnf")));
        assert!(shell.executed().is_empty());
    }

    #[test]
    fn advisory_includes_link_and_shell_command() {
        let tool = ToolSpec::new("deno", "deno --version").linux(
            InstallSpec::new()
                .link("https://deno.land/")
                .shell("curl -fsSL https://deno.land/x/install/install.sh | sh"),
        );
        let shell = ScriptedShell::new();
        let Resolution::Advisory { paths } =
            resolve(&tool, OsFamily::Linux, false, &shell).unwrap()
        else {
            panic!("expected advisory");
        };
        assert_eq!(paths.len(), 2);
        assert!(paths[0].contains("https://deno.land/"));
        assert!(paths[1].contains("install.sh"));
    }

    #[test]
    fn advisory_with_nothing_configured_is_empty() {
        let tool = ToolSpec::new("mystery", "mystery --version");
        let shell = ScriptedShell::new();
        let Resolution::Advisory { paths } =
            resolve(&tool, OsFamily::Linux, false, &shell).unwrap()
        else {
            panic!("expected advisory");
        };
        assert!(paths.is_empty());
        assert!(shell.executed().is_empty());
    }

    #[test]
    fn windows_scoop_wins_over_choco_and_winget() {
        let shell = ScriptedShell::new()
            .succeeds("scoop help")
            .succeeds("choco --version")
            .succeeds("winget --version");
        let git = crate::tools::catalog::git();
        let _ = resolve(&git, OsFamily::Windows, true, &shell);
        let executed = shell.executed();
        assert!(executed.contains(&"scoop install git".to_string()));
        assert!(!executed.iter().any(|c| c.starts_with("choco install")));
        assert!(!executed.iter().any(|c| c.starts_with("winget install")));
    }
}
