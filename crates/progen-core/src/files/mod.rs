//! Project file assembly: folders, READMEs, `.gitignore` and license files.

pub mod gitignore;
pub mod license;
pub mod readme;

pub use gitignore::{GitignoreContent, GitignoreFetcher};
pub use license::{License, LicenseCatalog, LicenseError};
pub use readme::{ReadmeBuilder, Section};

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A project root directory being assembled.
#[derive(Debug, Clone)]
pub struct Folder {
    path: PathBuf,
}

impl Folder {
    /// Create the directory (and any missing parents).
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a subdirectory and return it as its own `Folder`.
    pub fn subdir(&self, name: &str) -> io::Result<Folder> {
        Folder::create(self.path.join(name))
    }

    /// Write a file inside the folder, creating intermediate directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> io::Result<()> {
        let target = self.path.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, contents)
    }

    /// Delete the folder and everything under it.
    pub fn remove(self) -> io::Result<()> {
        fs::remove_dir_all(&self.path)
    }

    /// Render the folder as a tree with `├──`/`└──` connectors, ending with
    /// a `N directories, M files` footer. Hidden entries are included; the
    /// generated `.gitignore` is part of the result being shown.
    pub fn tree(&self) -> io::Result<String> {
        let mut out = String::new();
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        let _ = writeln!(out, "{name}/");

        let mut directories = 0usize;
        let mut files = 0usize;
        render_dir(&self.path, "", &mut out, &mut directories, &mut files)?;

        let _ = write!(out, "\n{directories} directories");
        if files > 0 {
            let _ = write!(out, ", {files} files");
        }
        let _ = writeln!(out);
        Ok(out)
    }
}

fn render_dir(
    dir: &Path,
    prefix: &str,
    out: &mut String,
    directories: &mut usize,
    files: &mut usize,
) -> io::Result<()> {
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::other)?;
        entries.push(entry.into_path());
    }

    let last = entries.len().saturating_sub(1);
    for (index, path) in entries.iter().enumerate() {
        let pointer = if index == last { "└── " } else { "├── " };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if path.is_dir() {
            let _ = writeln!(out, "{prefix}{pointer}{name}/");
            *directories += 1;
            let extension = if index == last { "    " } else { "│   " };
            render_dir(path, &format!("{prefix}{extension}"), out, directories, files)?;
        } else {
            let _ = writeln!(out, "{prefix}{pointer}{name}");
            *files += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("proj")).unwrap();
        root.write_file("src/main.c", "int main(void) { return 0; }\n").unwrap();
        root.write_file("README.md", "# proj\n").unwrap();
        assert!(root.path().join("src/main.c").is_file());
        assert!(root.path().join("README.md").is_file());
    }

    #[test]
    fn tree_renders_connectors_and_footer() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("proj")).unwrap();
        root.write_file("README.md", "").unwrap();
        root.write_file("src/main.c", "").unwrap();
        let tree = root.tree().unwrap();
        assert!(tree.starts_with("proj/\n"));
        assert!(tree.contains("├── README.md"));
        assert!(tree.contains("└── src/"));
        assert!(tree.contains("    └── main.c"));
        assert!(tree.trim_end().ends_with("1 directories, 2 files"));
    }

    #[test]
    fn tree_of_empty_folder_counts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("empty")).unwrap();
        let tree = root.tree().unwrap();
        assert!(tree.trim_end().ends_with("0 directories"));
        assert!(!tree.contains("files"));
    }

    #[test]
    fn remove_deletes_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = Folder::create(dir.path().join("gone")).unwrap();
        root.write_file("deep/nested/file.txt", "x").unwrap();
        let path = root.path().to_path_buf();
        root.remove().unwrap();
        assert!(!path.exists());
    }
}
