use std::{path::PathBuf, sync::Arc};

use clap::Args;
use eyre::{Context, Result};
use quickimpl_assist::{QueryClient, host::GoplsIndex};
use quickimpl_config::CONFIG_FILE_NAME;

use super::load_config;
use crate::reports::{Report, SearchReport, TerminalOutput};

#[derive(Args)]
pub struct SearchCommand {
    /// Part of the interface name
    pub keyword: String,

    /// Directory gopls runs in
    #[arg(short, long, default_value = ".")]
    pub workspace: PathBuf,

    /// Print candidates as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to quickimpl.toml (defaults to ./quickimpl.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl SearchCommand {
    pub async fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let index = GoplsIndex::from_config(&config.index, &self.workspace);
        let client = QueryClient::new(Arc::new(index));

        let candidates = client
            .query_interfaces(&self.keyword)
            .await
            .wrap_err_with(|| format!("Failed to search for '{}'", self.keyword))?;

        if self.json {
            let json = serde_json::to_string_pretty(&candidates)
                .wrap_err("Failed to serialize candidates")?;
            println!("{}", json);
            return Ok(());
        }

        SearchReport {
            keyword: self.keyword.clone(),
            candidates,
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
