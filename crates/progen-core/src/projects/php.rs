//! PHP starter project.

use super::ProjectKind;
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const INDEX_PHP: &str = "\
<?php

echo \"Hello, world!\";
";

pub struct PhpProject;

impl ProjectKind for PhpProject {
    fn name(&self) -> &'static str {
        "php"
    }

    fn languages(&self) -> &[&'static str] {
        &["HTML", "CSS", "JavaScript", "PHP"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ php -S localhost:8000".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::php()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("index.php", INDEX_PHP)
    }
}
