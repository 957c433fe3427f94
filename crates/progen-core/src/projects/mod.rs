//! Project generators: one [`ProjectKind`] per supported project family,
//! plus the [`generate`] driver that runs the whole pipeline.
//!
//! The pipeline is: gate the required tools, create the root folder, write
//! the README and `.gitignore`, optionally create the GitHub repository and
//! license, scaffold the starter files, run the post-scaffold commands, and
//! finally print the resulting tree with a warning summary.

mod c;
mod deno;
mod flutter;
mod go;
mod haskell;
mod java;
mod node;
mod php;
mod python;
mod website;

pub use c::{CProject, CppProject};
pub use deno::DenoProject;
pub use flutter::FlutterProject;
pub use go::GoProject;
pub use haskell::HaskellProject;
pub use java::{AntProject, JavaProject, MavenProject};
pub use node::{NodeProject, ReactProject, WebpackProject};
pub use php::PhpProject;
pub use python::{CythonProject, PyEnv, PythonProject};
pub use website::{TypescriptProject, WebsiteProject};

use crate::files::{Folder, GitignoreFetcher, License, LicenseCatalog, ReadmeBuilder, Section};
use crate::github::{self, GithubClient};
use crate::shell::Shell;
use crate::tools::{OsFamily, ToolError, ToolGate, ToolSpec};
use chrono::Datelike;
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A project family the CLI can generate.
pub trait ProjectKind {
    fn name(&self) -> &'static str;

    /// Languages used by the project, as github/gitignore template names.
    fn languages(&self) -> &[&'static str];

    /// README sections appended after the standard title and intro.
    fn readme_sections(&self) -> Vec<Section>;

    /// Tools the project cannot be generated without, in gate order.
    fn required_tools(&self, os: OsFamily) -> Vec<ToolSpec>;

    /// Write the starter files under the project root.
    fn scaffold(&self, root: &Folder) -> io::Result<()>;

    /// Commands to run once the files exist (scaffolding CLIs of the target
    /// ecosystem, environment setup). Warnings go in the context.
    fn post_scaffold(&self, _ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        Ok(())
    }
}

/// Everything a generator's post-scaffold step may need.
pub struct GenerateContext<'a> {
    pub shell: &'a dyn Shell,
    pub os: OsFamily,
    pub allow_install: bool,
    pub root: &'a Folder,
    pub project_name: &'a str,
    pub warnings: &'a mut Vec<String>,
}

impl GenerateContext<'_> {
    /// Run a command inside the project root; a non-zero exit becomes a
    /// warning, not a failure.
    pub fn run_in_root(&mut self, command: &str) -> Result<(), GenerateError> {
        self.run_in(command, self.root.path().to_path_buf())
    }

    /// Run a command in the project's parent directory, for ecosystem
    /// scaffolders that take the project name as an argument.
    pub fn run_in_parent(&mut self, command: &str) -> Result<(), GenerateError> {
        let parent = self
            .root
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        self.run_in(command, parent)
    }

    fn run_in(&mut self, command: &str, cwd: PathBuf) -> Result<(), GenerateError> {
        let code = self
            .shell
            .run_streamed(command, Some(&cwd))
            .map_err(|source| GenerateError::Command {
                command: command.to_string(),
                source,
            })?;
        if code != 0 {
            self.warnings
                .push(format!("`{command}` exited with code {code}"));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("failed to run `{command}`: {source}")]
    Command {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write project files: {0}")]
    Io(#[from] io::Error),
}

/// GitHub side of a generation run.
#[derive(Debug, Clone)]
pub struct GithubOptions {
    pub public: bool,
    pub license: License,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Parent directory the project root is created under.
    pub path: PathBuf,
    pub project_name: String,
    pub allow_install: bool,
    pub github: Option<GithubOptions>,
}

/// What a generation run produced, beyond the files on disk.
#[derive(Debug)]
pub struct GenerateReport {
    pub root: PathBuf,
    pub warnings: Vec<String>,
}

/// Run the full generation pipeline for one project.
///
/// GitHub trouble (repository creation, license fetch, push) never aborts
/// the run: the project is still generated locally and the failures are
/// accumulated as warnings.
pub fn generate(
    kind: &dyn ProjectKind,
    opts: &GenerateOptions,
    os: OsFamily,
    shell: &dyn Shell,
    gitignore: &GitignoreFetcher,
    licenses: &LicenseCatalog,
    github: Option<&GithubClient>,
) -> Result<GenerateReport, GenerateError> {
    let mut warnings = Vec::new();
    let gate = ToolGate::new(shell, os, opts.allow_install);
    gate.ensure_all(&kind.required_tools(os))?;
    if opts.github.is_some() {
        gate.ensure(&crate::tools::catalog::git())?;
    }

    let root = Folder::create(opts.path.join(&opts.project_name))?;

    let mut readme = ReadmeBuilder::new();
    readme
        .title(&opts.project_name, 1)
        .paragraph("Project generated with `progen`");
    for section in kind.readme_sections() {
        readme.section(&section);
    }
    root.write_file("README.md", &readme.build())?;

    let assembled = gitignore.fetch(kind.languages());
    if !assembled.content.is_empty() {
        root.write_file(".gitignore", &assembled.content)?;
    }
    warnings.extend(assembled.warnings);

    let repo = match (&opts.github, github) {
        (Some(github_opts), Some(client)) => {
            match client.create_repo(&opts.project_name, github_opts.public) {
                Ok(repo) => {
                    let year = chrono::Utc::now().year();
                    match licenses.text(github_opts.license, &repo.owner_login, year) {
                        Ok(text) => root.write_file("LICENSE", &text)?,
                        Err(err) => warnings.push(format!("no LICENSE was written: {err}")),
                    }
                    Some(repo)
                }
                Err(err) => {
                    warnings.push(format!("could not create the GitHub repository: {err}"));
                    None
                }
            }
        }
        _ => None,
    };

    kind.scaffold(&root)?;

    let mut ctx = GenerateContext {
        shell,
        os,
        allow_install: opts.allow_install,
        root: &root,
        project_name: &opts.project_name,
        warnings: &mut warnings,
    };
    kind.post_scaffold(&mut ctx)?;

    if let Some(repo) = &repo {
        if let Err(err) = github::push_initial(shell, root.path(), repo, "Initial commit") {
            ctx.warnings
                .push(format!("could not push the initial commit: {err}"));
        }
    }

    print!("{}", root.tree()?);
    let count = warnings.len();
    let colored_count = if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().red()
    };
    println!("\n{colored_count} warnings during generation");
    for warning in &warnings {
        println!("- {warning}");
    }

    Ok(GenerateReport {
        root: root.path().to_path_buf(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedShell;

    fn offline_fetcher() -> GitignoreFetcher {
        // Nothing listens on this port; templates fall back.
        GitignoreFetcher::new("http://127.0.0.1:9")
    }

    fn opts(dir: &Path, name: &str) -> GenerateOptions {
        GenerateOptions {
            path: dir.to_path_buf(),
            project_name: name.to_string(),
            allow_install: false,
            github: None,
        }
    }

    #[test]
    fn generates_a_c_project_with_readme_and_sources() {
        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new().succeeds("gcc --version");
        let report = generate(
            &CProject,
            &opts(dir.path(), "hello"),
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            None,
        )
        .unwrap();

        let root = report.root;
        assert!(root.join("main.c").is_file());
        assert!(root.join("add.c").is_file());
        assert!(root.join("add.h").is_file());
        let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.starts_with("# hello\n"));
        assert!(readme.contains("gcc main.c add.c -o prog"));
        // The offline gitignore fallback carries a warning.
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn missing_required_tool_stops_generation_before_any_file() {
        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new();
        let err = generate(
            &CProject,
            &opts(dir.path(), "hello"),
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::Tool(_)));
        assert!(!dir.path().join("hello").exists());
    }

    #[test]
    fn website_project_needs_no_tools() {
        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new();
        let report = generate(
            &WebsiteProject,
            &opts(dir.path(), "site"),
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            None,
        )
        .unwrap();
        assert!(report.root.join("index.html").is_file());
        assert!(report.root.join("style/style.css").is_file());
        assert!(report.root.join("js/script.js").is_file());
        assert!(shell.probed().is_empty());
    }

    #[test]
    fn post_scaffold_commands_run_with_explicit_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new().succeeds("flutter --version");
        let report = generate(
            &FlutterProject,
            &opts(dir.path(), "app"),
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            None,
        )
        .unwrap();
        assert_eq!(shell.executed(), vec!["flutter create app"]);
        // Ran in the parent, not inside the project root.
        assert_eq!(shell.cwds(), vec![Some(dir.path().to_path_buf())]);
        assert!(report.root.ends_with("app"));
    }

    #[test]
    fn github_success_writes_license_and_pushes() {
        let server = httpmock::MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::POST).path("/user/repos");
            then.status(201).json_body(serde_json::json!({
                "name": "site",
                "owner": { "login": "jane" }
            }));
        });

        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new().succeeds("git --version");
        let client = GithubClient::new(server.base_url(), "t0ken");
        let mut options = opts(dir.path(), "site");
        options.github = Some(GithubOptions {
            public: true,
            license: License::Unlicense,
        });
        let report = generate(
            &WebsiteProject,
            &options,
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            Some(&client),
        )
        .unwrap();

        let license = std::fs::read_to_string(report.root.join("LICENSE")).unwrap();
        assert!(license.contains("public domain"));
        let executed = shell.executed();
        assert_eq!(executed[0], "git init");
        assert!(executed
            .contains(&"git remote add origin https://github.com/jane/site.git".to_string()));
        assert!(shell
            .cwds()
            .iter()
            .all(|cwd| cwd.as_deref() == Some(report.root.as_path())));
    }

    #[test]
    fn failed_repo_creation_still_generates_the_project_locally() {
        let server = httpmock::MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::POST).path("/user/repos");
            then.status(401);
        });

        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new().succeeds("git --version");
        let client = GithubClient::new(server.base_url(), "expired");
        let mut options = opts(dir.path(), "site");
        options.github = Some(GithubOptions {
            public: false,
            license: License::Unlicense,
        });
        let report = generate(
            &WebsiteProject,
            &options,
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            Some(&client),
        )
        .unwrap();

        // The local tree exists; the license and push were skipped.
        assert!(report.root.join("index.html").is_file());
        assert!(!report.root.join("LICENSE").exists());
        assert!(shell.executed().is_empty());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("could not create the GitHub repository")));
    }

    #[test]
    fn failed_push_is_a_warning_not_an_error() {
        let server = httpmock::MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::POST).path("/user/repos");
            then.status(201).json_body(serde_json::json!({
                "name": "site",
                "owner": { "login": "jane" }
            }));
        });

        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new()
            .succeeds("git --version")
            .exec_fails("git push -u origin master", 128);
        let client = GithubClient::new(server.base_url(), "t0ken");
        let mut options = opts(dir.path(), "site");
        options.github = Some(GithubOptions {
            public: true,
            license: License::Unlicense,
        });
        let report = generate(
            &WebsiteProject,
            &options,
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            Some(&client),
        )
        .unwrap();
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("could not push the initial commit")));
    }

    #[test]
    fn failed_post_scaffold_command_is_a_warning_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let shell = ScriptedShell::new()
            .succeeds("flutter --version")
            .exec_fails("flutter create app", 1);
        let report = generate(
            &FlutterProject,
            &opts(dir.path(), "app"),
            OsFamily::Linux,
            &shell,
            &offline_fetcher(),
            &LicenseCatalog::default(),
            None,
        )
        .unwrap();
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("flutter create app")));
    }
}
