use crate::domain::ports::RecordStorage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A data file on the local disk, one record per line.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStorage for LocalStorage {
    fn read_lines(&self) -> Result<Vec<Vec<u8>>> {
        let content = fs::read(&self.path)?;
        let mut lines: Vec<Vec<u8>> = content
            .split(|byte| *byte == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
            .collect();
        if content.ends_with(b"\n") || content.is_empty() {
            lines.pop();
        }
        Ok(lines)
    }

    /// Replaces the file content. Lines are expected to carry their own
    /// terminators; a missing final newline is added.
    fn write_lines(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            if !line.ends_with('\n') {
                content.push('\n');
            }
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}
