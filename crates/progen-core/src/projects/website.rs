//! Static website starter projects, plain JavaScript or TypeScript.

use super::{GenerateContext, GenerateError, ProjectKind};
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const SCRIPT_JS: &str = "\
console.log(\"Hello, world!\");
";

const SCRIPT_TS: &str = "\
const greeting: string = \"Hello, world!\";
console.log(greeting);
";

const STYLE_CSS: &str = "\
body {
    margin: 0;
    font-family: sans-serif;
}
";

/// Minimal tsconfig written when `tsc --init` is not run.
const TSCONFIG_JSON: &str = "\
{
  \"compilerOptions\": {
    \"target\": \"es6\",
    \"module\": \"es2015\",
    \"strict\": true
  }
}
";

fn index_html(script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <title>Home</title>\n\
         \x20   <link type=\"text/css\" rel=\"stylesheet\" href=\"style/style.css\">\n\
         </head>\n\
         <body>\n\
         \x20   <script src=\"{script}\"></script>\n\
         </body>\n\
         </html>\n"
    )
}

fn scaffold_site(root: &Folder, script_name: &str, script_body: &str) -> io::Result<()> {
    root.write_file(script_name, script_body)?;
    root.write_file("style/style.css", STYLE_CSS)?;
    root.subdir("assets/images")?;
    root.subdir("assets/fonts")?;
    root.write_file("index.html", &index_html(script_name))
}

pub struct WebsiteProject;

impl ProjectKind for WebsiteProject {
    fn name(&self) -> &'static str {
        "website"
    }

    fn languages(&self) -> &[&'static str] {
        &["HTML", "CSS", "JavaScript"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Paragraph("Open `index.html` in a browser.".into()),
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        Vec::new()
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        scaffold_site(root, "js/script.js", SCRIPT_JS)
    }
}

pub struct TypescriptProject;

impl ProjectKind for TypescriptProject {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn languages(&self) -> &[&'static str] {
        &["HTML", "CSS", "JavaScript", "Typescript"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Compile the typescript](#compilation)".into()),
            Section::Title("Compilation".into(), 2),
            Section::Code {
                code: "$ tsc js/script.ts".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::npm(), catalog::tsc()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        scaffold_site(root, "js/script.ts", SCRIPT_TS)
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        if ctx.allow_install {
            ctx.run_in_root("tsc --init")
        } else {
            ctx.root.write_file("tsconfig.json", TSCONFIG_JSON)?;
            Ok(())
        }
    }
}
