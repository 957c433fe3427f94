//! Go starter project.

use super::{GenerateContext, GenerateError, ProjectKind};
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const MAIN_GO: &str = "\
package main

import \"fmt\"

func main() {
\tfmt.Println(\"Hello, world!\")
}
";

pub struct GoProject;

impl ProjectKind for GoProject {
    fn name(&self) -> &'static str {
        "go"
    }

    fn languages(&self) -> &[&'static str] {
        &["Go"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph(
                "1. [Simple run](#simple-run)\n2. [Execute binary program](#execute-binary-program)"
                    .into(),
            ),
            Section::Title("Simple run".into(), 2),
            Section::Code {
                code: "$ go run main.go".into(),
                language: Some("shell".into()),
            },
            Section::Title("Execute binary program".into(), 2),
            Section::Code {
                code: "$ go build main.go && main".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::go()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("main.go", MAIN_GO)
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        let name = ctx.project_name.to_string();
        ctx.run_in_root(&format!("go mod init {name}"))
    }
}
