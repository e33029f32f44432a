use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset the configuration to defaults without prompting
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let config = if args.reset { Config::default() } else { Config::init()? };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
