//! Node.js, React and webpack starter projects.

use super::{GenerateContext, GenerateError, ProjectKind};
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use serde_json::json;
use std::fs;
use std::io;

const INDEX_JS: &str = "\
console.log(\"Hello, world!\");
";

const WEBPACK_DEV_DEPS: &str = "npm i -D webpack webpack-cli webpack-dev-server \
@babel/core babel-loader @babel/preset-env html-webpack-plugin html-loader \
file-loader style-loader css-loader mini-css-extract-plugin";

fn usage_sections(run_command: &str) -> Vec<Section> {
    vec![
        Section::Title("Table of contents".into(), 2),
        Section::Paragraph("1. [Usage of the application](#usage)".into()),
        Section::Title("Usage".into(), 2),
        Section::Code {
            code: run_command.into(),
            language: Some("shell".into()),
        },
    ]
}

pub struct NodeProject;

impl ProjectKind for NodeProject {
    fn name(&self) -> &'static str {
        "node"
    }

    fn languages(&self) -> &[&'static str] {
        &["Node"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        usage_sections("$ node index.js")
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::npm(), catalog::npx()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        let package = json!({
            "name": root.path().file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
            "version": "0.1.0",
            "main": "index.js",
            "scripts": { "start": "node index.js" }
        });
        root.write_file(
            "package.json",
            &format!("{}\n", serde_json::to_string_pretty(&package).unwrap_or_default()),
        )?;
        root.write_file("index.js", INDEX_JS)
    }
}

pub struct ReactProject;

impl ProjectKind for ReactProject {
    fn name(&self) -> &'static str {
        "react"
    }

    fn languages(&self) -> &[&'static str] {
        &["Node"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        usage_sections("$ npm start")
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::npm(), catalog::npx()]
    }

    fn scaffold(&self, _root: &Folder) -> io::Result<()> {
        // create-react-app writes the whole tree itself.
        Ok(())
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        let command = format!("npx create-react-app {}", ctx.project_name);
        if ctx.allow_install {
            ctx.run_in_parent(&command)
        } else {
            println!("Launch `{command}` to create the ReactJS app");
            ctx.warnings
                .push(format!("the ReactJS app was not created; run `{command}`"));
            Ok(())
        }
    }
}

pub struct WebpackProject;

impl ProjectKind for WebpackProject {
    fn name(&self) -> &'static str {
        "webpack"
    }

    fn languages(&self) -> &[&'static str] {
        &["Node"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph(
                "1. [Development server](#development-server)\n2. [Production build](#production-build)"
                    .into(),
            ),
            Section::Title("Development server".into(), 2),
            Section::Code {
                code: "$ npm start".into(),
                language: Some("shell".into()),
            },
            Section::Title("Production build".into(), 2),
            Section::Code {
                code: "$ npm run build".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::npm(), catalog::npx()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.subdir("src")?;
        root.subdir("public")?;
        root.write_file("src/index.js", INDEX_JS)
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        if !ctx.allow_install {
            println!("Launch `npm init -y` and `{WEBPACK_DEV_DEPS}` to finish the setup");
            ctx.warnings
                .push("webpack dependencies were not installed".to_string());
            return Ok(());
        }
        ctx.run_in_root("npm init -y")?;
        ctx.run_in_root(WEBPACK_DEV_DEPS)?;
        set_webpack_scripts(ctx.root)?;
        Ok(())
    }
}

/// Point the `build`/`start` scripts of the generated `package.json` at
/// webpack.
fn set_webpack_scripts(root: &Folder) -> Result<(), GenerateError> {
    let path = root.path().join("package.json");
    let raw = fs::read_to_string(&path)?;
    let mut package: serde_json::Value =
        serde_json::from_str(&raw).unwrap_or_else(|_| json!({}));
    package["scripts"] = json!({
        "build": "webpack --mode=production",
        "start": "webpack-dev-server"
    });
    fs::write(
        &path,
        format!("{}\n", serde_json::to_string_pretty(&package).unwrap_or_default()),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedShell;

    #[test]
    fn node_scaffold_writes_runnable_package_json() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("app")).unwrap();
        NodeProject.scaffold(&root).unwrap();
        let raw = fs::read_to_string(root.path().join("package.json")).unwrap();
        let package: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(package["name"], "app");
        assert_eq!(package["scripts"]["start"], "node index.js");
    }

    #[test]
    fn react_without_install_only_warns() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("app")).unwrap();
        let shell = ScriptedShell::new();
        let mut warnings = Vec::new();
        let mut ctx = GenerateContext {
            shell: &shell,
            os: OsFamily::Linux,
            allow_install: false,
            root: &root,
            project_name: "app",
            warnings: &mut warnings,
        };
        ReactProject.post_scaffold(&mut ctx).unwrap();
        assert!(shell.executed().is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn webpack_install_rewrites_package_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("app")).unwrap();
        root.write_file("package.json", "{\"name\": \"app\"}").unwrap();
        let shell = ScriptedShell::new();
        let mut warnings = Vec::new();
        let mut ctx = GenerateContext {
            shell: &shell,
            os: OsFamily::Linux,
            allow_install: true,
            root: &root,
            project_name: "app",
            warnings: &mut warnings,
        };
        WebpackProject.post_scaffold(&mut ctx).unwrap();
        assert_eq!(shell.executed()[0], "npm init -y");
        let raw = fs::read_to_string(root.path().join("package.json")).unwrap();
        let package: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(package["scripts"]["build"], "webpack --mode=production");
        assert_eq!(package["scripts"]["start"], "webpack-dev-server");
    }
}
