mod actions;
mod completions;
mod compose;
mod implement;
mod search;

use std::path::Path;

use actions::ActionsCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use compose::ComposeCommand;
use eyre::{Result, eyre};
use implement::ImplementCommand;
use quickimpl_config::{Config, ConfigFile, GenerationConfig, ReceiverNameMode, ReceiverType};
use quickimpl_core::InterfaceCandidate;
use search::SearchCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for quickimpl_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `path`, or defaults when it doesn't exist.
pub(crate) fn load_config(path: &Path) -> Config {
    let file = ConfigFile::open_or_default(path).unwrap_or_exit();
    if file.is_loaded() {
        tracing::debug!(path = %file.path().display(), "loaded config");
    }
    file.into_config()
}

/// Convert a one-based line number from the command line.
pub(crate) fn zero_based(line: usize) -> Result<usize> {
    line.checked_sub(1)
        .ok_or_else(|| eyre!("line numbers start at 1"))
}

/// `io.Reader` or `Reader`, split at the last dot.
pub(crate) fn parse_interface(name: &str) -> InterfaceCandidate {
    match name.rsplit_once('.') {
        Some((package, name)) => InterfaceCandidate::new(name).in_package(package),
        None => InterfaceCandidate::new(name),
    }
}

/// Receiver settings that override the config file.
#[derive(Args, Debug, Default)]
pub(crate) struct ReceiverOverrides {
    /// Receiver type: pointer or value
    #[arg(long)]
    pub receiver_type: Option<ReceiverType>,

    /// Characters of the struct name used as the receiver name
    #[arg(long, conflicts_with = "receiver_name")]
    pub receiver_name_length: Option<usize>,

    /// Use this receiver name instead of deriving one
    #[arg(long)]
    pub receiver_name: Option<String>,
}

impl ReceiverOverrides {
    pub fn apply(&self, config: &mut GenerationConfig) {
        if let Some(receiver_type) = self.receiver_type {
            config.receiver_type = receiver_type;
        }
        if let Some(length) = self.receiver_name_length {
            config.receiver_name_mode = ReceiverNameMode::Derived;
            config.receiver_name_length = length;
        }
        if let Some(name) = &self.receiver_name {
            config.receiver_name_mode = ReceiverNameMode::Fixed;
            config.fixed_receiver_name = name.clone();
        }
    }
}

#[derive(Parser)]
#[command(name = "quickimpl")]
#[command(version)]
#[command(about = "Generate Go interface method stubs for a struct")]
pub(crate) struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Actions(cmd) => cmd.run(),
            Commands::Search(cmd) => cmd.run().await,
            Commands::Compose(cmd) => cmd.run(),
            Commands::Implement(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the code actions offered on a line
    Actions(ActionsCommand),

    /// Search the workspace for interfaces
    Search(SearchCommand),

    /// Print the generator command for a struct and interface
    Compose(ComposeCommand),

    /// Implement an interface on the struct declared at a line
    Implement(ImplementCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
