//! Haskell starter project.

use super::ProjectKind;
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const MAIN_HS: &str = "\
main :: IO ()
main = putStrLn \"Hello, world!\"
";

pub struct HaskellProject;

impl ProjectKind for HaskellProject {
    fn name(&self) -> &'static str {
        "haskell"
    }

    fn languages(&self) -> &[&'static str] {
        &["Haskell"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ ghci main.hs".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::ghc()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("main.hs", MAIN_HS)
    }
}
