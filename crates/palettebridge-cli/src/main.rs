//! PaletteBridge CLI entry point.

use clap::Parser;
use log::LevelFilter;
use palettebridge_cli::Config;
use palettebridge_cli::cli::Cli;
use palettebridge_cli::commands::execute;
use palettebridge_cli::storage::FileStorage;
use std::io;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_cli(&cli);
    let storage = FileStorage::new(config.state_path.clone());
    log::debug!("Using state file {}", storage.path().display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(error) = execute(cli.command, &config, &storage, &mut out) {
        log::error!("{error}");
        std::process::exit(1);
    }
}
