// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The "Implement Interface Methods" quick fix.
//!
//! The workflow runs in this order:
//!
//! 1. [`quickfix`] offers the action when the cursor line declares a struct
//! 2. [`prompt`] lets the user search interfaces, debouncing keystrokes into
//!    [`query`] calls against a [`SymbolIndex`]
//! 3. [`compose`] builds the stub generator command from the selection
//! 4. [`invoke`] runs the generator with a timeout
//! 5. [`apply`] inserts the stubs after the struct's declaration
//!
//! Editor services are reached only through the traits in [`ports`], so
//! everything here runs against in-memory fakes in tests. [`host`] holds the
//! adapters used by the terminal front end.
//!
//! # Module Organization
//!
//! - [`ports`] - Host services (SymbolIndex, DocumentModel, Notifier)
//! - [`host`] - Adapters for a Go checkout on disk (gopls, source files)
//! - [`testing`] - In-memory ports (feature-gated)

pub mod apply;
pub mod compose;
mod error;
pub mod host;
pub mod invoke;
mod notification;
pub mod ports;
pub mod prompt;
pub mod query;
pub mod quickfix;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use apply::{Insertion, apply};
pub use compose::{GenerationCommand, compose, receiver_name};
pub use error::{AssistError, Result};
pub use invoke::{GenerationResult, GeneratorInvoker};
pub use notification::{Notification, Severity};
pub use ports::{DocumentModel, Notifier, SymbolIndex};
pub use prompt::{
    PromptEvent, PromptHandle, PromptOutcome, PromptState, PromptUpdate, SelectionPrompt,
};
pub use query::QueryClient;
pub use quickfix::{CodeAction, CodeActionKind, IMPLEMENT_ACTION_TITLE, ImplementInterfaceProvider};
