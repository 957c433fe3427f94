//! Flutter starter project, delegated to `flutter create`.

use super::{GenerateContext, GenerateError, ProjectKind};
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

pub struct FlutterProject;

impl ProjectKind for FlutterProject {
    fn name(&self) -> &'static str {
        "flutter"
    }

    fn languages(&self) -> &[&'static str] {
        &["Flutter", "Dart"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ flutter run".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::flutter()]
    }

    fn scaffold(&self, _root: &Folder) -> io::Result<()> {
        // `flutter create` writes the whole tree itself.
        Ok(())
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        let name = ctx.project_name.to_string();
        ctx.run_in_parent(&format!("flutter create {name}"))
    }
}
