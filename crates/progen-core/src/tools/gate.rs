//! The gate generators pass before scaffolding: one check per required tool.

use super::resolver::{resolve, Resolution, ToolError};
use super::spec::ToolSpec;
use super::OsFamily;
use crate::shell::Shell;

/// Combined probe + resolve step for a project's required tools.
///
/// Gates are independent and run in declaration order. For a required tool,
/// a missing tool with installation disallowed is fatal after the advisory
/// print; [`ToolGate::advise`] is the warning-only variant for optional
/// tooling.
pub struct ToolGate<'a> {
    shell: &'a dyn Shell,
    os: OsFamily,
    allow_install: bool,
}

impl<'a> ToolGate<'a> {
    pub fn new(shell: &'a dyn Shell, os: OsFamily, allow_install: bool) -> Self {
        Self {
            shell,
            os,
            allow_install,
        }
    }

    /// Guarantee one tool is present, installing it if allowed.
    pub fn ensure(&self, tool: &ToolSpec) -> Result<(), ToolError> {
        match resolve(tool, self.os, self.allow_install, self.shell)? {
            Resolution::Advisory { .. } => Err(ToolError::Unavailable {
                tool: tool.name.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Guarantee every tool is present, in declaration order. The first
    /// failure stops the gate; later tools are not checked.
    pub fn ensure_all(&self, tools: &[ToolSpec]) -> Result<(), ToolError> {
        for tool in tools {
            self.ensure(tool)?;
        }
        Ok(())
    }

    /// Check a tool without treating absence as fatal. Returns whether the
    /// tool ended up available; fatal resolver outcomes are demoted to
    /// `false` so the caller can continue and surface a warning.
    pub fn advise(&self, tool: &ToolSpec) -> bool {
        match resolve(tool, self.os, self.allow_install, self.shell) {
            Ok(Resolution::Advisory { .. }) => false,
            Ok(_) => true,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedShell;
    use crate::tools::catalog;
    use crate::tools::spec::InstallSpec;

    #[test]
    fn gate_passes_when_all_tools_present() {
        let shell = ScriptedShell::new()
            .succeeds("java --version")
            .succeeds("javac --version")
            .succeeds("ant --version");
        let gate = ToolGate::new(&shell, OsFamily::Linux, false);
        let tools = [catalog::java(), catalog::javac(), catalog::ant()];
        assert!(gate.ensure_all(&tools).is_ok());
    }

    #[test]
    fn gate_checks_tools_in_declaration_order() {
        let shell = ScriptedShell::new()
            .succeeds("java --version")
            .succeeds("javac --version")
            .succeeds("mvn --version");
        let gate = ToolGate::new(&shell, OsFamily::Linux, false);
        let tools = [catalog::java(), catalog::javac(), catalog::maven()];
        gate.ensure_all(&tools).unwrap();
        assert_eq!(
            shell.probed(),
            vec!["java --version", "javac --version", "mvn --version"]
        );
    }

    #[test]
    fn missing_tool_without_install_is_fatal() {
        let shell = ScriptedShell::new();
        let gate = ToolGate::new(&shell, OsFamily::Linux, false);
        let err = gate.ensure(&catalog::gcc()).unwrap_err();
        assert!(matches!(err, ToolError::Unavailable { .. }));
        // Advisory only: nothing was executed.
        assert!(shell.executed().is_empty());
    }

    #[test]
    fn first_missing_tool_stops_the_gate() {
        let shell = ScriptedShell::new().succeeds("javac --version");
        let gate = ToolGate::new(&shell, OsFamily::Linux, false);
        let tools = [catalog::java(), catalog::javac()];
        assert!(gate.ensure_all(&tools).is_err());
        // javac was never probed: java failed first.
        assert!(!shell.probed().contains(&"javac --version".to_string()));
    }

    #[test]
    fn advise_demotes_fatal_outcomes() {
        let tool = ToolSpec::new("pipenv", "pipenv -h")
            .linux(InstallSpec::new().shell("sudo pip3 install pipenv"));
        let shell = ScriptedShell::new();
        // Install allowed but the re-probe still fails: advise reports
        // unavailable instead of erroring.
        let gate = ToolGate::new(&shell, OsFamily::Linux, true);
        assert!(!gate.advise(&tool));
        assert_eq!(shell.executed(), vec!["sudo pip3 install pipenv"]);
    }

    #[test]
    fn advise_reports_present_tool() {
        let shell = ScriptedShell::new().succeeds("pipenv -h");
        let tool = ToolSpec::new("pipenv", "pipenv -h");
        let gate = ToolGate::new(&shell, OsFamily::Linux, false);
        assert!(gate.advise(&tool));
    }
}
