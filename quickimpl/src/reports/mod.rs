//! Report data structures for commands.
//!
//! Commands collect what happened into a report, then render it to an
//! Output target.

mod actions;
mod implement;
mod output;
mod search;

pub use actions::ActionsReport;
pub use implement::ImplementReport;
pub use output::{Report, Stream, TerminalOutput};
pub use search::SearchReport;
