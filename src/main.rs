use anyhow::Result;
use chatline::cli::{self, Cli};
use clap::Parser;

fn main() -> Result<()> {
    // Parse first so --help and usage errors print before logging starts
    let cli = Cli::parse();
    let level = chatline::debug::init_logger(cli.log_level);

    log::info!(
        "Starting chatline {} (log level {})",
        chatline::VERSION,
        level
    );

    if let Err(e) = cli::run(cli) {
        eprintln!("chatline: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
