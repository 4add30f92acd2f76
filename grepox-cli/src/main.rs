mod cli;
mod config;
mod error;
mod search;

use clap::Parser;
use cli::Cli;
use config::Config;

fn init_tracing() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from(cli);

    if config.dry_run_requested() {
        println!("{config}");
        std::process::exit(0);
    }

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();

    match search::run(&config, &mut lock) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{} {err}", err.tag());
            std::process::exit(err.exit_code());
        }
    }
}
