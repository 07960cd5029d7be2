use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use quickimpl_assist::{GeneratorInvoker, compose};
use quickimpl_config::CONFIG_FILE_NAME;
use quickimpl_core::TriggerContext;

use super::{ReceiverOverrides, load_config, parse_interface};

#[derive(Args)]
pub struct ComposeCommand {
    /// Struct receiving the methods
    #[arg(short, long = "struct")]
    pub struct_name: String,

    /// Interface to implement, e.g. io.Reader
    #[arg(short, long)]
    pub interface: String,

    #[command(flatten)]
    pub receiver: ReceiverOverrides,

    /// Path to quickimpl.toml (defaults to ./quickimpl.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl ComposeCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = load_config(&self.config);
        self.receiver.apply(&mut config.generation);

        let line = format!("type {} struct", self.struct_name);
        let trigger = TriggerContext::detect(&line)
            .filter(|trigger| trigger.struct_name() == self.struct_name)
            .ok_or_else(|| eyre!("'{}' is not a struct name", self.struct_name))?;
        let command = compose(
            &trigger,
            &parse_interface(&self.interface),
            &config.generation,
        )?;

        let invoker = GeneratorInvoker::from_config(&config.generator);
        println!("{}", invoker.command_line(&command));
        Ok(())
    }
}
