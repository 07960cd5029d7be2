// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for quickimpl, read from `quickimpl.toml`.
//!
//! Top-level keys use the same names as the editor settings they mirror
//! (`receiverNameMode`, `receiverNameLength`, `fixedReceiverName`,
//! `receiverType`). Tool and prompt settings live in their own tables.

mod config;
mod error;
mod file;
mod parse;
mod receiver;
mod validate;

pub use config::{Config, GenerationConfig, GeneratorConfig, IndexConfig, PromptConfig};
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, ConfigFile};
pub use receiver::{ReceiverNameMode, ReceiverType};
