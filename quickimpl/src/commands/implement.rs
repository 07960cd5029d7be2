use std::{path::PathBuf, sync::Arc};

use clap::Args;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use quickimpl_assist::{
    DocumentModel, ImplementInterfaceProvider, Notifier, PromptHandle,
    host::{GoplsIndex, SourceDocument},
};
use quickimpl_config::CONFIG_FILE_NAME;
use quickimpl_core::InterfaceCandidate;
use tokio::task::spawn_blocking;

use super::{ReceiverOverrides, load_config, parse_interface, zero_based};
use crate::{
    notifier::TerminalNotifier,
    reports::{ImplementReport, Report, Stream, TerminalOutput},
};

const SEARCH_AGAIN: &str = "(search again)";

#[derive(Args)]
pub struct ImplementCommand {
    /// Go source file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Line of the struct declaration, starting at 1
    #[arg(short, long)]
    pub line: usize,

    /// Interface to implement, e.g. io.Reader (prompts when omitted)
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Print the edited file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub receiver: ReceiverOverrides,

    /// Path to quickimpl.toml (defaults to ./quickimpl.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl ImplementCommand {
    pub async fn run(&self) -> Result<()> {
        let mut config = load_config(&self.config);
        self.receiver.apply(&mut config.generation);

        let line = zero_based(self.line)?;
        let mut document = SourceDocument::open(&self.file)?;

        let index = GoplsIndex::from_config(&config.index, document.working_dir());
        let placeholder = config.prompt.placeholder.clone();
        let notifier = Arc::new(TerminalNotifier);
        let provider = ImplementInterfaceProvider::new(Arc::new(index), config, notifier.clone());
        let action = provider.action_at(&document, line)?;

        let outcome = match &self.interface {
            Some(name) => provider
                .implement(&action, &mut document, &parse_interface(name))
                .await
                .map(Some),
            None => match provider.open_prompt(&action) {
                Ok((prompt, handle)) => {
                    let (outcome, driven) = tokio::join!(
                        provider.resolve(&action, &mut document, prompt),
                        drive_prompt(handle, placeholder),
                    );
                    driven?;
                    outcome
                }
                Err(e) => Err(e),
            },
        };

        let Ok(outcome) = outcome else {
            // already shown by the notifier
            std::process::exit(1);
        };
        let Some(insertion) = outcome else {
            notifier.info("No interface selected");
            return Ok(());
        };

        if self.dry_run {
            print!("{}", document.content());
        } else {
            document
                .save()
                .wrap_err_with(|| format!("Failed to write {}", self.file.display()))?;
        }

        ImplementReport {
            file: self.file.clone(),
            struct_name: action.trigger.struct_name().to_string(),
            insertion,
            dry_run: self.dry_run,
        }
        .render(&mut TerminalOutput::to(report_stream(self.dry_run)));
        Ok(())
    }
}

/// A dry run prints the edited file on stdout, so its report goes to stderr.
fn report_stream(dry_run: bool) -> Stream {
    if dry_run {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

/// Feed terminal input into the selection prompt until the user picks an
/// interface or backs out. Returning drops the handle, which dismisses the
/// prompt if nothing was selected.
async fn drive_prompt(mut handle: PromptHandle, placeholder: String) -> Result<()> {
    loop {
        let prompt = placeholder.clone();
        let keyword = spawn_blocking(move || {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .interact_text()
        })
        .await
        .wrap_err("Prompt task failed")?
        .wrap_err("Failed to read interface name")?;

        handle.set_value(keyword);
        let Some(items) = handle.next_items().await else {
            return Ok(());
        };
        if items.is_empty() {
            eprintln!("No interfaces found, try another name");
            continue;
        }

        let mut labels: Vec<String> =
            items.iter().map(InterfaceCandidate::qualified_name).collect();
        labels.push(SEARCH_AGAIN.to_string());
        let selection = spawn_blocking(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Select an interface")
                .items(&labels)
                .default(0)
                .interact_opt()
        })
        .await
        .wrap_err("Prompt task failed")?
        .wrap_err("Failed to get interface selection")?;

        match selection {
            Some(index) if index < items.len() => {
                handle.select(index);
                return Ok(());
            }
            Some(_) => continue,
            None => {
                handle.dismiss();
                return Ok(());
            }
        }
    }
}
