//! Shell command execution.
//!
//! The only interface the tool-gating core has to the outside world is
//! "run this shell command and get back (exit code, stdout, stderr)".
//! That boundary is the [`Shell`] trait: [`SystemShell`] spawns real
//! processes, [`ScriptedShell`] serves canned exit codes for tests.

use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Result of executing a shell command with captured output.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by a signal).
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Process boundary used by probes, installers and generators.
///
/// A probe does not distinguish "not installed" from "installed but
/// erroring": any non-zero exit (including the shell's command-not-found
/// code) means "not available".
pub trait Shell {
    /// Run a command through the platform shell, capturing output.
    fn run(&self, command: &str) -> io::Result<CommandOutput>;

    /// Run a command with stdio inherited from the parent, so installers
    /// and build tools can interact with the terminal. The working
    /// directory is always passed explicitly; the process-wide current
    /// directory is never mutated.
    fn run_streamed(&self, command: &str, cwd: Option<&Path>) -> io::Result<i32>;

    /// Test tool availability via exit code.
    fn probe(&self, command: &str) -> bool {
        self.run(command).map(|out| out.success()).unwrap_or(false)
    }

    /// Run a command whose failure is tolerable (package-manager updates).
    /// A non-zero exit is logged and swallowed.
    fn best_effort(&self, command: &str) {
        match self.run_streamed(command, None) {
            Ok(0) => {}
            Ok(code) => tracing::warn!(command, code, "best-effort command failed"),
            Err(err) => tracing::warn!(command, %err, "best-effort command could not run"),
        }
    }
}

/// The platform shell and its command flag.
fn platform_shell() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

/// Real shell execution through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn run(&self, command: &str) -> io::Result<CommandOutput> {
        let (shell, flag) = platform_shell();
        let output = Command::new(shell)
            .arg(flag)
            .arg(command)
            .stdin(Stdio::null())
            .output()?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_streamed(&self, command: &str, cwd: Option<&Path>) -> io::Result<i32> {
        println!("{} `{}`", "Executing".bold(), command.yellow());
        let (shell, flag) = platform_shell();
        let mut cmd = Command::new(shell);
        cmd.arg(flag).arg(command);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let status = cmd.status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Scripted shell for tests: probe outcomes are configured up front and
/// every executed command is recorded in order, so resolver behavior can
/// be asserted deterministically without touching the system.
#[derive(Debug, Default)]
pub struct ScriptedShell {
    outcomes: HashMap<String, Vec<bool>>,
    probe_counts: RefCell<HashMap<String, usize>>,
    probes: RefCell<Vec<String>>,
    executed: RefCell<Vec<String>>,
    cwds: RefCell<Vec<Option<PathBuf>>>,
    fail_executed: HashMap<String, i32>,
}

impl ScriptedShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a probe command as succeeding.
    pub fn succeeds(mut self, command: &str) -> Self {
        self.outcomes.insert(command.to_string(), vec![true]);
        self
    }

    /// Mark a probe command as failing (also the default for unknown commands).
    pub fn fails(mut self, command: &str) -> Self {
        self.outcomes.insert(command.to_string(), vec![false]);
        self
    }

    /// Script successive probe outcomes for a command; the last outcome
    /// repeats once the sequence is exhausted. Used to model a tool that
    /// becomes available after an install.
    pub fn probe_sequence(mut self, command: &str, outcomes: &[bool]) -> Self {
        self.outcomes.insert(command.to_string(), outcomes.to_vec());
        self
    }

    /// Make an executed (streamed) command return the given non-zero code.
    pub fn exec_fails(mut self, command: &str, code: i32) -> Self {
        self.fail_executed.insert(command.to_string(), code);
        self
    }

    /// Commands probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.probes.borrow().clone()
    }

    /// Commands executed (streamed) so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    /// Working directories passed to executed commands, in order.
    pub fn cwds(&self) -> Vec<Option<PathBuf>> {
        self.cwds.borrow().clone()
    }
}

impl Shell for ScriptedShell {
    fn run(&self, command: &str) -> io::Result<CommandOutput> {
        self.probes.borrow_mut().push(command.to_string());
        let ok = match self.outcomes.get(command) {
            Some(seq) => {
                let mut counts = self.probe_counts.borrow_mut();
                let count = counts.entry(command.to_string()).or_insert(0);
                let ok = seq.get(*count).or(seq.last()).copied().unwrap_or(false);
                *count += 1;
                ok
            }
            None => false,
        };
        Ok(CommandOutput {
            code: Some(if ok { 0 } else { 127 }),
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    fn run_streamed(&self, command: &str, cwd: Option<&Path>) -> io::Result<i32> {
        self.executed.borrow_mut().push(command.to_string());
        self.cwds.borrow_mut().push(cwd.map(Path::to_path_buf));
        Ok(self.fail_executed.get(command).copied().unwrap_or(0))
    }
}
