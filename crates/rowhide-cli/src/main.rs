use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = std::result::Result<T, rowhide_core::RowhideError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    log::debug!("invoked with {args:?}");
    let options = args.codec_options();

    match args.command {
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Find(cmd) => cmd.run(options),
        Commands::FindRaw(cmd) => cmd.run(options),
    }
}
