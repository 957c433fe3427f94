//! C and C++ starter projects.

use super::ProjectKind;
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const ADD_H: &str = "\
#ifndef ADD_H
#define ADD_H

int add(int a, int b);

#endif
";

const ADD_C: &str = "\
#include \"add.h\"

int add(int a, int b)
{
    return a + b;
}
";

const MAIN_C: &str = "\
#include <stdio.h>

#include \"add.h\"

int main(void)
{
    printf(\"2 + 3 = %d\\n\", add(2, 3));
    return 0;
}
";

const MAIN_CPP: &str = "\
#include <iostream>

int main()
{
    std::cout << \"Hello, world!\" << std::endl;
    return 0;
}
";

pub struct CProject;

impl ProjectKind for CProject {
    fn name(&self) -> &'static str {
        "c"
    }

    fn languages(&self) -> &[&'static str] {
        &["C"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ gcc main.c add.c -o prog".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::gcc()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("add.h", ADD_H)?;
        root.write_file("add.c", ADD_C)?;
        root.write_file("main.c", MAIN_C)
    }
}

pub struct CppProject;

impl ProjectKind for CppProject {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn languages(&self) -> &[&'static str] {
        &["C++"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ g++ main.cpp -o prog".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::gxx()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("main.cpp", MAIN_CPP)
    }
}
