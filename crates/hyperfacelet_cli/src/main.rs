//! Command-line driver for the hyperfacelet cube model.

use clap::Parser;

mod cli;

fn main() -> eyre::Result<()> {
    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    log::debug!("{} {:?}", hyperfacelet::ENGINE_VERSION_STRING, args);
    cli::exec(args.subcommand)
}
