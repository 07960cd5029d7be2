//! Actions command report data structures.

use std::path::PathBuf;

use quickimpl_assist::CodeAction;

use super::output::{Output, Report};

/// Code actions offered on one line.
#[derive(Debug)]
pub struct ActionsReport {
    pub file: PathBuf,
    /// One-based line number, as given on the command line.
    pub line: usize,
    pub actions: Vec<CodeAction>,
}

impl Report for ActionsReport {
    fn render(&self, out: &mut dyn Output) {
        let location = format!("{}:{}", self.file.display(), self.line);
        if self.actions.is_empty() {
            out.preformatted(&format!("No code actions for {}", location));
            return;
        }

        out.section(&format!("Code actions for {}", location));
        for action in &self.actions {
            out.list_item(&format!("{} [{}]", action.title, action.kind));
            if !action.trigger.has_struct_name() {
                out.warning("no struct name on this line, the action will fail");
            }
        }
    }
}
