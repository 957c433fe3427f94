//! progen - project scaffolding with tool gating

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use progen_core::files::{GitignoreFetcher, License, LicenseCatalog};
use progen_core::projects::{
    generate, AntProject, CProject, CppProject, CythonProject, DenoProject, FlutterProject,
    GenerateOptions, GithubOptions, GoProject, HaskellProject, JavaProject, MavenProject,
    NodeProject, PhpProject, ProjectKind, PyEnv, PythonProject, ReactProject, TypescriptProject,
    WebpackProject, WebsiteProject,
};
use progen_core::github::GithubClient;
use progen_core::{OsFamily, SystemShell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "progen")]
#[command(about = "Scaffold language projects, installing the tools they need")]
#[command(version)]
struct Args {
    /// Automatically install missing required tools
    #[arg(short = 'i', long = "allow-install", global = true)]
    allow_install: bool,

    /// Create a GitHub repository and push the initial commit
    /// (needs GITHUB_TOKEN or GITHUB_OAUTH_ACCESS_TOKEN)
    #[arg(long, global = true)]
    github: bool,

    /// Make the GitHub repository public instead of private
    #[arg(long, global = true, requires = "github")]
    public: bool,

    /// License to include when creating the GitHub repository
    #[arg(long, global = true, default_value = "unlicense")]
    license: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Parent directory the project root is created under
    path: PathBuf,

    /// Name of the project
    project_name: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EnvChoice {
    Venv,
    Pipenv,
}

impl From<EnvChoice> for PyEnv {
    fn from(choice: EnvChoice) -> Self {
        match choice {
            EnvChoice::Venv => PyEnv::Venv,
            EnvChoice::Pipenv => PyEnv::Pipenv,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a C project
    C(ProjectArgs),
    /// Create a C++ project
    Cpp(ProjectArgs),
    /// Create a Go project
    Go(ProjectArgs),
    /// Create a Python project
    Python {
        #[command(flatten)]
        project: ProjectArgs,

        /// Virtual environment to set up
        #[arg(long, value_enum)]
        env: Option<EnvChoice>,
    },
    /// Create a Python project with a compiled Cython extension
    Cython {
        #[command(flatten)]
        project: ProjectArgs,

        /// Virtual environment to set up
        #[arg(long, value_enum)]
        env: Option<EnvChoice>,
    },
    /// Create a Node.js project
    Node(ProjectArgs),
    /// Create a ReactJS app via create-react-app
    React(ProjectArgs),
    /// Create a webpack project
    Webpack(ProjectArgs),
    /// Create a plain Java project
    Java(ProjectArgs),
    /// Create a Maven project via the quickstart archetype
    Maven(ProjectArgs),
    /// Create a Java project with an Ant build
    Ant(ProjectArgs),
    /// Create a PHP project
    Php(ProjectArgs),
    /// Create a Deno project
    Deno(ProjectArgs),
    /// Create a Flutter app via flutter create
    Flutter(ProjectArgs),
    /// Create a Haskell project
    Haskell(ProjectArgs),
    /// Create a static website
    Website(ProjectArgs),
    /// Create a static website written in TypeScript
    Typescript(ProjectArgs),
}

impl Command {
    fn into_parts(self) -> (Box<dyn ProjectKind>, ProjectArgs) {
        match self {
            Command::C(args) => (Box::new(CProject), args),
            Command::Cpp(args) => (Box::new(CppProject), args),
            Command::Go(args) => (Box::new(GoProject), args),
            Command::Python { project, env } => {
                (Box::new(PythonProject { env: env.map(EnvChoice::into) }), project)
            }
            Command::Cython { project, env } => {
                (Box::new(CythonProject { env: env.map(EnvChoice::into) }), project)
            }
            Command::Node(args) => (Box::new(NodeProject), args),
            Command::React(args) => (Box::new(ReactProject), args),
            Command::Webpack(args) => (Box::new(WebpackProject), args),
            Command::Java(args) => (Box::new(JavaProject), args),
            Command::Maven(args) => (Box::new(MavenProject), args),
            Command::Ant(args) => (Box::new(AntProject), args),
            Command::Php(args) => (Box::new(PhpProject), args),
            Command::Deno(args) => (Box::new(DenoProject), args),
            Command::Flutter(args) => (Box::new(FlutterProject), args),
            Command::Haskell(args) => (Box::new(HaskellProject), args),
            Command::Website(args) => (Box::new(WebsiteProject), args),
            Command::Typescript(args) => (Box::new(TypescriptProject), args),
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // An explicit --github with no usable token is a usage error; everything
    // that can fail later (API calls, the push) only warns.
    let (github, client) = if args.github {
        let opts = GithubOptions {
            public: args.public,
            license: License::from_key(&args.license)?,
        };
        (Some(opts), Some(GithubClient::from_env()?))
    } else {
        (None, None)
    };

    let (kind, project) = args.command.into_parts();
    let opts = GenerateOptions {
        path: project.path,
        project_name: project.project_name,
        allow_install: args.allow_install,
        github,
    };

    let result = generate(
        kind.as_ref(),
        &opts,
        OsFamily::detect(),
        &SystemShell,
        &GitignoreFetcher::default(),
        &LicenseCatalog::default(),
        client.as_ref(),
    );

    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(report) => {
            println!(
                "{}",
                format!("`{}` was generated at {}", opts.project_name, report.root.display())
                    .green()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", format!("generation failed: {err}").red());
            std::process::exit(1);
        }
    }
}
