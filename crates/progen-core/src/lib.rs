//! progen core - shared library for the `progen` scaffolding CLI
//!
//! This library provides everything the binary needs to generate a project:
//!
//! - **Shell boundary** - [`shell`] runs commands through the platform shell
//!   and is the only way the rest of the crate touches the system.
//! - **Tool gating** - [`tools`] probes the external tools a project needs
//!   and resolves an installation path for the missing ones through the
//!   host's package managers.
//! - **File assembly** - [`files`] builds folders, READMEs, `.gitignore`
//!   files and license files.
//! - **GitHub** - [`github`] creates the remote repository and pushes the
//!   initial commit.
//! - **Generators** - [`projects`] ties it all together, one generator per
//!   project family.
//!
//! Everything is synchronous; long-running installs stream their output to
//! the terminal directly.

pub mod files;
pub mod github;
pub mod projects;
pub mod shell;
pub mod tools;

pub use projects::{generate, GenerateError, GenerateOptions, ProjectKind};
pub use shell::{Shell, SystemShell};
pub use tools::{OsFamily, ToolGate};
