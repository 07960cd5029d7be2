//! In-memory ports for exercising the workflow.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. Documents don't need a fake: a
//! [`crate::host::SourceDocument`] only touches disk when saved.

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use quickimpl_core::Symbol;

use crate::{AssistError, Notification, Notifier, Result, SymbolIndex};

/// Answers queries from a fixed symbol list and records every keyword.
pub struct StaticSymbolIndex {
    symbols: Vec<Symbol>,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl StaticSymbolIndex {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Sleep this long (on the tokio clock) before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Keywords received so far, oldest first.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SymbolIndex for StaticSymbolIndex {
    async fn query(&self, keyword: &str) -> Result<Vec<Symbol>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(keyword.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let keyword = keyword.to_lowercase();
        Ok(self
            .symbols
            .iter()
            .filter(|symbol| symbol.name.to_lowercase().contains(&keyword))
            .cloned()
            .collect())
    }
}

/// An index whose every query fails.
pub struct FailingSymbolIndex {
    message: String,
}

impl FailingSymbolIndex {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl SymbolIndex for FailingSymbolIndex {
    async fn query(&self, _keyword: &str) -> Result<Vec<Symbol>> {
        Err(AssistError::SymbolQuery {
            message: self.message.clone(),
        })
    }
}

/// Collects notifications instead of showing them.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|notes| notes.clone())
            .unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|note| note.severity.is_error())
            .map(|note| note.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notes) = self.notifications.lock() {
            notes.push(notification);
        }
    }
}
