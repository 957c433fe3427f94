//! Java starter projects: plain javac, Maven and Ant builds.

use super::{GenerateContext, GenerateError, ProjectKind};
use crate::files::{Folder, Section};
use crate::tools::{catalog, OsFamily, ToolSpec};
use std::io;

const MAIN_JAVA: &str = "\
package main;

public class Main {
    public static void main(String[] args) {
        System.out.println(\"Hello, world!\");
    }
}
";

const BUILD_XML: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<project name=\"app\" basedir=\".\" default=\"run\">
    <property name=\"src.dir\" value=\"src\"/>
    <property name=\"build.dir\" value=\"build\"/>

    <target name=\"compile\">
        <mkdir dir=\"${build.dir}\"/>
        <javac srcdir=\"${src.dir}\" destdir=\"${build.dir}\" includeantruntime=\"false\"/>
    </target>

    <target name=\"run\" depends=\"compile\">
        <java classname=\"main.Main\" classpath=\"${build.dir}\"/>
    </target>

    <target name=\"clean\">
        <delete dir=\"${build.dir}\"/>
    </target>
</project>
";

fn compile_sections() -> Vec<Section> {
    vec![
        Section::Title("Table of contents".into(), 2),
        Section::Paragraph("1. [Usage of the application](#usage)".into()),
        Section::Title("Usage".into(), 2),
        Section::Code {
            code: "$ javac -encoding \"utf-8\" -d build/ src/*.java".into(),
            language: Some("shell".into()),
        },
        Section::Code {
            code: "$ java -cp build main.Main [args ...]".into(),
            language: Some("shell".into()),
        },
    ]
}

pub struct JavaProject;

impl ProjectKind for JavaProject {
    fn name(&self) -> &'static str {
        "java"
    }

    fn languages(&self) -> &[&'static str] {
        &["Java"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        compile_sections()
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::java(), catalog::javac()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.subdir("src/test/java")?;
        root.subdir("src/main/resources")?;
        root.write_file("src/main/java/main/Main.java", MAIN_JAVA)
    }
}

pub struct MavenProject;

impl ProjectKind for MavenProject {
    fn name(&self) -> &'static str {
        "maven"
    }

    fn languages(&self) -> &[&'static str] {
        &["Java", "Maven"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ mvn package".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::java(), catalog::javac(), catalog::maven()]
    }

    fn scaffold(&self, _root: &Folder) -> io::Result<()> {
        // The Maven archetype writes the whole tree itself.
        Ok(())
    }

    fn post_scaffold(&self, ctx: &mut GenerateContext<'_>) -> Result<(), GenerateError> {
        let name = ctx.project_name.to_string();
        ctx.run_in_parent(&format!(
            "mvn archetype:generate -DgroupId=com.{name} -DartifactId={name} \
             -DarchetypeArtifactId=maven-archetype-quickstart -DinteractiveMode=false"
        ))
    }
}

pub struct AntProject;

impl ProjectKind for AntProject {
    fn name(&self) -> &'static str {
        "ant"
    }

    fn languages(&self) -> &[&'static str] {
        &["Java"]
    }

    fn readme_sections(&self) -> Vec<Section> {
        vec![
            Section::Title("Table of contents".into(), 2),
            Section::Paragraph("1. [Usage of the application](#usage)".into()),
            Section::Title("Usage".into(), 2),
            Section::Code {
                code: "$ ant run".into(),
                language: Some("shell".into()),
            },
        ]
    }

    fn required_tools(&self, _os: OsFamily) -> Vec<ToolSpec> {
        vec![catalog::java(), catalog::javac(), catalog::ant()]
    }

    fn scaffold(&self, root: &Folder) -> io::Result<()> {
        root.write_file("build.xml", BUILD_XML)?;
        root.write_file("src/main/Main.java", MAIN_JAVA)
    }
}
