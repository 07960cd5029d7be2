//! Core types and utilities for quickimpl.
//!
//! This crate provides the host-independent vocabulary shared by the
//! assist workflow and the terminal host: symbols and ranges, the
//! struct-declaration trigger, and an editable source buffer.

mod decl;
mod file;
mod trigger;
mod types;
mod utils;

// Go declaration lookup
pub use decl::{find_type_decls, package_name};
// Source buffers
pub use file::SourceFile;
// Trigger detection
pub use trigger::{STRUCT_KEYWORD, TriggerContext, should_offer};
// Fundamental types
pub use types::{InterfaceCandidate, Position, Range, Symbol, SymbolKind};
// String utilities
pub use utils::{qualified_name, receiver_prefix};
