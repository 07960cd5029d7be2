//! Ports backed by a Go checkout on disk.
//!
//! [`GoplsIndex`] asks `gopls` for workspace symbols; [`SourceDocument`]
//! edits a Go file in memory and writes it back on save.

mod gopls;
mod source;

pub use gopls::{GoplsIndex, parse_workspace_symbols};
pub use source::SourceDocument;
