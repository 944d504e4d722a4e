//! bee-yaml CLI
//!
//! Prints a Bee node configuration to stdout.

use bee_yaml::BEE_YAML;
use beekit_common::{parse_args, LogArgs};
use clap::Parser;
use tracing::debug;

/// Bee configuration printer
#[derive(Parser, Debug)]
#[command(name = "bee-yaml")]
#[command(version)]
#[command(about = "Print a Bee node configuration", long_about = None)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = parse_args();
    cli.log.init();

    debug!(bytes = BEE_YAML.len(), "printing configuration");
    println!("{}", BEE_YAML);
}
