//! Python and Cython starter projects, with optional virtual-environment
//! setup.

use super::{GenerateContext, GenerateError, ProjectKind};
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolGate, ToolSpec};
use std::io;

const MAIN_PY: &str = "\
def main():
    print(\"Hello, world!\")


if __name__ == \"__main__\":
    main()
";

const TEST_MAIN_PY: &str = "\
import unittest

from main import main


class MainTest(unittest.TestCase):
    def test_main(self):
        self.assertIsNone(main())


if __name__ == \"__main__\":
    unittest.main()
";

/// Which virtual environment the project is set up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyEnv {
    Venv,
    Pipenv,
}

pub struct PythonProject {
    pub env: Option<PyEnv>,
}

impl ProjectKind for PythonProject {
    fn name(&self) -> &'static str {
        "python"
    }

    fn languages(&self) -> &[&'static str] {
        &["Python"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ python3 main.py".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, os: OsFamily) -> Vec<ToolSpec> {
        let windows_host = os == OsFamily::Windows;
        vec![catalog::python(windows_host), catalog::pip(windows_host)]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("main.py", MAIN_PY)?;
        root.write_file("tests/test_main.py", TEST_MAIN_PY)
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        let python = if ctx.os == OsFamily::Windows {
            "python"
        } else {
            "python3"
        };
        match self.env {
            Some(PyEnv::Venv) => ctx.run_in_root(&format!("{python} -m venv env")),
            Some(PyEnv::Pipenv) => {
                // pipenv is optional tooling: a missing or uninstallable
                // pipenv degrades to a warning instead of failing the run.
                let gate = ToolGate::new(ctx.shell, ctx.os, ctx.allow_install);
                if gate.advise(&catalog::pipenv()) {
                    ctx.run_in_root("pipenv install")
                } else {
                    ctx.warnings
                        .push("pipenv is not available; no environment was created".to_string());
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }
}

const SCRIPT_PYX: &str = "\
def greet(str name):
    return f\"Hello, {name}!\"
";

const SCRIPT_PXD: &str = "\
cpdef greet(str name)
";

const SETUP_PY: &str = "\
from distutils.core import setup
from distutils.extension import Extension
from os.path import join, dirname

from Cython.Build import cythonize
from Cython.Distutils import build_ext


path = dirname(__file__)

extensions = [
    Extension('script', sources=[join(path, 'script.pyx')]),
]

setup(
    cmdclass={'build_ext': build_ext},
    ext_modules=cythonize(extensions))
";

/// A Python project with a compiled Cython extension. Builds on
/// [`PythonProject`] for the interpreter gate and environment handling, and
/// additionally gates on gcc for the extension build.
pub struct CythonProject {
    pub env: Option<PyEnv>,
}

impl CythonProject {
    fn base(&self) -> PythonProject {
        PythonProject { env: self.env }
    }
}

impl ProjectKind for CythonProject {
    fn name(&self) -> &'static str {
        "cython"
    }

    fn languages(&self) -> &[&'static str] {
        &["Python", "Cython"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ python3 setup.py build_ext --inplace".into(),
                language: Some("shell".into()),
            },
            Section::Code {
                code: "$ python3 main.py".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, os: OsFamily) -> Vec<ToolSpec> {
        // The extension build needs a C compiler before anything Python.
        let mut tools = vec![catalog::gcc()];
        tools.extend(self.base().required_tools(os));
        tools
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        self.base().scaffold(root)?;
        root.write_file("script.pyx", SCRIPT_PYX)?;
        root.write_file("script.pxd", SCRIPT_PXD)?;
        root.write_file("setup.py", SETUP_PY)
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        self.base().post_scaffold(ctx)?;
        let pip = if ctx.os == OsFamily::Windows {
            "pip"
        } else {
            "pip3"
        };
        let command = format!("{pip} install Cython");
        if ctx.allow_install {
            ctx.run_in_root(&command)
        } else {
            ctx.warnings
                .push(format!("Cython was not installed; run `{command}`"));
            Ok(())
        }
    }
}
