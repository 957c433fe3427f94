//! Deno starter project.

use super::ProjectKind;
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const SERVER_TS: &str = "\
import { serve } from \"https://deno.land/std/http/server.ts\";

const server = serve({ port: 8000 });
console.log(\"http://localhost:8000/\");

for await (const req of server) {
  req.respond({ body: \"Hello, world!\\n\" });
}
";

pub struct DenoProject;

impl ProjectKind for DenoProject {
    fn name(&self) -> &'static str {
        "deno"
    }

    fn languages(&self) -> &[&'static str] {
        &["Deno"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ deno run --allow-net server.ts".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::deno()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("server.ts", SERVER_TS)
    }
}
