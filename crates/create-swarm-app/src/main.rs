//! create-swarm-app CLI
//!
//! Scaffolds a starter application that talks to a local Bee node.

use std::path::{Path, PathBuf};

use anyhow::Result;
use beekit_common::{finish, parse_args, LogArgs, EXIT_FAILURE};
use clap::Parser;
use create_swarm_app::{next_steps, scaffold, usage, TemplateKind};

/// Swarm app scaffolder
#[derive(Parser, Debug)]
#[command(name = "create-swarm-app")]
#[command(version)]
#[command(about = "Create a starter Swarm application", long_about = None)]
#[command(override_usage = "npm init swarm-app <name> <type>")]
struct Cli {
    /// Project directory name
    name: Option<String>,

    /// Template: node, node-esm, node-ts or vite-tsx
    #[arg(value_name = "TYPE")]
    kind: Option<String>,

    /// Directory in which the project directory is created
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = parse_args();
    cli.log.init();

    let (name, kind) = match (cli.name, cli.kind) {
        (Some(name), Some(kind)) if !name.is_empty() && !kind.is_empty() => (name, kind),
        _ => {
            eprintln!("{}", usage());
            std::process::exit(EXIT_FAILURE);
        }
    };

    let trace = cli.log.trace;
    finish(execute(&cli.output, &name, &kind), trace);
}

fn execute(output: &Path, name: &str, kind: &str) -> Result<()> {
    let kind: TemplateKind = kind.parse()?;
    scaffold(output, name, kind)?;
    for line in next_steps(name) {
        println!("{}", line);
    }
    Ok(())
}
