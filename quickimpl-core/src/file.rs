use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// An editable source file held in memory.
///
/// Edits are applied to the buffer only; call [`SourceFile::save`] to write
/// them back.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    /// Create a buffer with the given path and content without touching disk.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Ok(Self { path, content })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of line `index` without its line terminator.
    pub fn line_at(&self, index: usize) -> Option<&str> {
        self.content.lines().nth(index)
    }

    /// Insert `text` at the start of line `index`.
    ///
    /// Indices past the last line append to the end of the buffer, adding a
    /// line break first if the buffer doesn't end with one.
    pub fn insert_at_line(&mut self, index: usize, text: &str) {
        let offset = match self.line_offset(index) {
            Some(offset) => offset,
            None => {
                if !self.content.is_empty() && !self.content.ends_with('\n') {
                    self.content.push('\n');
                }
                self.content.len()
            }
        };
        self.content.insert_str(offset, text);
    }

    /// Write the buffer back to its path.
    pub fn save(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }

    fn line_offset(&self, index: usize) -> Option<usize> {
        if index == 0 {
            return Some(0);
        }
        self.content
            .match_indices('\n')
            .nth(index - 1)
            .map(|(pos, _)| pos + 1)
            .filter(|&pos| pos < self.content.len())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
