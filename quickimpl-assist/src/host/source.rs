use std::path::Path;

use async_trait::async_trait;
use quickimpl_core::{SourceFile, Symbol, find_type_decls};

use crate::{AssistError, DocumentModel, Result};

/// A Go source file as the document under edit.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    file: SourceFile,
}

impl SourceDocument {
    pub fn new(file: SourceFile) -> Self {
        Self { file }
    }

    /// Read the document from disk.
    pub fn open(path: impl AsRef<Path>) -> eyre::Result<Self> {
        Ok(Self::new(SourceFile::open(path)?))
    }

    pub fn content(&self) -> &str {
        self.file.content()
    }

    /// Write pending edits back to disk.
    pub fn save(&self) -> Result<()> {
        self.file.save().map_err(|e| AssistError::Document {
            message: format!("{:#}", e),
        })
    }
}

#[async_trait]
impl DocumentModel for SourceDocument {
    fn path(&self) -> &Path {
        self.file.path()
    }

    fn line_at(&self, line: usize) -> Option<String> {
        self.file.line_at(line).map(str::to_string)
    }

    async fn symbols_named(&self, name: &str) -> Result<Vec<Symbol>> {
        Ok(find_type_decls(self.file.content())
            .into_iter()
            .filter(|symbol| symbol.name == name)
            .collect())
    }

    async fn insert_at_line(&mut self, line: usize, text: &str) -> Result<()> {
        self.file.insert_at_line(line, text);
        Ok(())
    }
}
