use clap::Parser;
use near_miss::config::Config;
use std::process;
use tracing::{debug, error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search for near misses of x^n + y^n = z^n", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("{:?}", cli.config);

    if let Err(e) = cmd::search::run(&cli.config) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
