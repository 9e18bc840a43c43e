//! Writing generated sources to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{GeneratedFile, Result};

/// Strip trailing whitespace from every line and end the text with exactly
/// one newline.
fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<&str> = src.lines().map(str::trim_end).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Persist generated files under `out_dir`, creating any necessary
/// subdirectories. Returns the written paths in input order.
pub fn write_generated<P: AsRef<Path>>(out_dir: P, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, clean_generated_source(&file.source))?;
        debug!(path = %path.display(), "wrote file");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_generated_source() {
        assert_eq!(clean_generated_source("class A {   \n}\n\n\n"), "class A {\n}\n");
        assert_eq!(clean_generated_source("\n \n"), "");
    }

    #[test]
    fn test_write_creates_package_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let files = vec![GeneratedFile {
            path: PathBuf::from("com/example/Foo.java"),
            source: "class Foo {} \n".to_string(),
        }];
        let written = write_generated(dir.path(), &files).expect("write");
        assert_eq!(written, vec![dir.path().join("com/example/Foo.java")]);
        let contents = fs::read_to_string(&written[0]).expect("read back");
        assert_eq!(contents, "class Foo {}\n");
    }
}
