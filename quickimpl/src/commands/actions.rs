use std::{path::PathBuf, sync::Arc};

use clap::Args;
use eyre::Result;
use quickimpl_assist::{
    ImplementInterfaceProvider,
    host::{GoplsIndex, SourceDocument},
};
use quickimpl_config::CONFIG_FILE_NAME;
use quickimpl_core::Range;

use super::{load_config, zero_based};
use crate::{
    notifier::TerminalNotifier,
    reports::{ActionsReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ActionsCommand {
    /// Go source file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Line number, starting at 1
    #[arg(short, long)]
    pub line: usize,

    /// Path to quickimpl.toml (defaults to ./quickimpl.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl ActionsCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let line = zero_based(self.line)?;
        let document = SourceDocument::open(&self.file)?;

        let index = GoplsIndex::from_config(&config.index, ".");
        let provider =
            ImplementInterfaceProvider::new(Arc::new(index), config, Arc::new(TerminalNotifier));
        let actions = provider.provide_code_actions(&document, Range::lines(line, line));

        ActionsReport {
            file: self.file.clone(),
            line: self.line,
            actions,
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
