//! bee-docker CLI
//!
//! Generates a docker-compose setup with keys and configuration for N Bee
//! nodes.

use std::path::PathBuf;

use anyhow::Result;
use bee_docker::{parse_node_count, GenerateOptions, DEFAULT_IMAGE};
use beekit_common::{finish, parse_args, LogArgs};
use clap::Parser;
use tracing::info;

/// Bee docker-compose generator
#[derive(Parser, Debug)]
#[command(name = "bee-docker")]
#[command(version)]
#[command(about = "Generate a docker-compose setup for N Bee nodes", long_about = None)]
struct Cli {
    /// Number of nodes to generate
    #[arg(value_parser = parse_node_count)]
    count: usize,

    /// Directory receiving docker-compose.yml, addresses.txt and node_NN/
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Container image for every service
    #[arg(long, default_value = DEFAULT_IMAGE)]
    image: String,

    /// User the containers run as
    #[arg(long, env = "USER", default_value = "root")]
    user: String,

    /// Print the compose file and planned directories without writing
    #[arg(long, default_value = "false")]
    dry_run: bool,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() {
    let cli: Cli = parse_args();
    cli.log.init();

    let trace = cli.log.trace;
    finish(execute(cli).await, trace);
}

async fn execute(cli: Cli) -> Result<()> {
    let opts = GenerateOptions {
        count: cli.count,
        output: cli.output,
        image: cli.image,
        user: cli.user,
        dry_run: cli.dry_run,
    };
    info!(count = opts.count, output = %opts.output.display(), "generating nodes");

    let summary = bee_docker::run(&opts).await?;
    info!(nodes = summary.node_dirs.len(), "done");
    Ok(())
}
