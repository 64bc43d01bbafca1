//! Command-line entry point.

use clap::Parser;
use fabkit_app::{Cli, run};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli).and_then(|report| report.to_json(cli.pretty)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("fabkit: {}", e);
            std::process::exit(1);
        }
    }
}
