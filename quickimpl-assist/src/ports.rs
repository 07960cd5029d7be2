//! Services the host editor provides.
//!
//! The workflow never talks to an editor directly. Each host (a language
//! server, an editor plugin, the terminal front end) implements these traits
//! once; tests use the in-memory versions from [`crate::testing`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quickimpl_core::Symbol;

use crate::{Notification, Result};

/// Workspace-wide symbol search.
#[async_trait]
pub trait SymbolIndex: Send + Sync {
    /// Symbols matching `keyword`, of any kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AssistError::SymbolQuery`] when the index can't
    /// answer. An empty answer is `Ok(vec![])`.
    async fn query(&self, keyword: &str) -> Result<Vec<Symbol>>;
}

/// The document the quick fix was requested on.
#[async_trait]
pub trait DocumentModel: Send {
    /// Path of the document on disk.
    fn path(&self) -> &Path;

    /// Text of a zero-based line, without its terminator.
    fn line_at(&self, line: usize) -> Option<String>;

    /// Symbols declared in this document whose name is exactly `name`.
    async fn symbols_named(&self, name: &str) -> Result<Vec<Symbol>>;

    /// Insert `text` at the start of a zero-based line.
    async fn insert_at_line(&mut self, line: usize, text: &str) -> Result<()>;

    /// Directory external tools run in.
    fn working_dir(&self) -> PathBuf {
        match self.path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Non-blocking user notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }

    fn warning(&self, message: &str) {
        self.notify(Notification::warning(message));
    }

    fn info(&self, message: &str) {
        self.notify(Notification::info(message));
    }
}
