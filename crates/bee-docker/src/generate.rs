//! Deployment generation
//!
//! Writes the compose file first, then each node in order, then the address
//! summary. Nodes finished before a failure are left on disk.

use std::fs;
use std::path::{Path, PathBuf};

use beekit_common::fs::{create_fresh_dir, is_already_exists, write_new_file};
use beekit_crypto::{Keystore, Wallet};
use tracing::{debug, info};

use crate::bee_config::{derive_password, render_bee_config, CONFIG_FILE, KEYS_DIR, KEY_FILE};
use crate::compose::render_compose;
use crate::error::GenerateError;
use crate::node::{plan_nodes, NodeSpec};
use crate::{ADDRESSES_FILE, COMPOSE_FILE, DEFAULT_IMAGE};

/// Generation inputs
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub count: usize,
    /// Directory receiving the compose file, summary and node directories
    pub output: PathBuf,
    pub image: String,
    /// Value of each service's `user:` field
    pub user: String,
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(count: usize, output: impl Into<PathBuf>) -> Self {
        Self {
            count,
            output: output.into(),
            image: DEFAULT_IMAGE.to_string(),
            user: "root".to_string(),
            dry_run: false,
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    /// Node directories, in node order
    pub node_dirs: Vec<PathBuf>,
    /// Checksummed wallet addresses, in node order. Empty for a dry run.
    pub addresses: Vec<String>,
}

/// Generate the deployment described by `opts`
pub async fn run(opts: &GenerateOptions) -> Result<GenerateSummary, GenerateError> {
    let nodes = plan_nodes(opts.count)?;
    preflight(&opts.output, &nodes)?;

    let compose = render_compose(&nodes, &opts.image, &opts.user);
    let node_dirs: Vec<PathBuf> = nodes.iter().map(|n| opts.output.join(n.dir_name())).collect();

    if opts.dry_run {
        print!("{}", compose);
        for dir in &node_dirs {
            println!("would create {}", dir.display());
        }
        return Ok(GenerateSummary {
            node_dirs,
            addresses: Vec::new(),
        });
    }

    fs::create_dir_all(&opts.output).map_err(|e| GenerateError::io(&opts.output, e))?;
    let compose_path = opts.output.join(COMPOSE_FILE);
    fs::write(&compose_path, compose).map_err(|e| GenerateError::io(&compose_path, e))?;
    info!(path = %compose_path.display(), nodes = nodes.len(), "wrote compose file");

    let mut addresses = Vec::with_capacity(nodes.len());
    for (node, dir) in nodes.iter().zip(&node_dirs) {
        println!("Creating node {}", node.number());
        addresses.push(create_node(node, dir).await?);
    }

    let addresses_path = opts.output.join(ADDRESSES_FILE);
    fs::write(&addresses_path, render_addresses(&addresses))
        .map_err(|e| GenerateError::io(&addresses_path, e))?;

    println!("{} created", COMPOSE_FILE);
    println!("{} created", ADDRESSES_FILE);
    println!("Directories created");

    Ok(GenerateSummary {
        node_dirs,
        addresses,
    })
}

/// Fail before writing anything if a node directory is already present
fn preflight(output: &Path, nodes: &[NodeSpec]) -> Result<(), GenerateError> {
    match nodes
        .iter()
        .find(|node| output.join(node.dir_name()).exists())
    {
        Some(node) => Err(GenerateError::DirectoryExists(node.dir_name())),
        None => Ok(()),
    }
}

/// Lay out one node directory and return its wallet address
async fn create_node(node: &NodeSpec, dir: &Path) -> Result<String, GenerateError> {
    create_fresh_dir(dir).map_err(|e| {
        if is_already_exists(&e) {
            GenerateError::DirectoryExists(node.dir_name())
        } else {
            GenerateError::io(dir, e)
        }
    })?;

    let keys_dir = KEYS_DIR.iter().fold(dir.to_path_buf(), |p, part| p.join(part));
    fs::create_dir_all(&keys_dir).map_err(|e| GenerateError::io(&keys_dir, e))?;

    let password = derive_password(&Wallet::random());

    // scrypt at full cost; keep it off the runtime threads
    let key_password = password.clone();
    let (address, keystore) = tokio::task::spawn_blocking(move || {
        let wallet = Wallet::random();
        Keystore::encrypt(&wallet, &key_password).map(|ks| (wallet.checksum_address(), ks))
    })
    .await??;

    keystore.save(keys_dir.join(KEY_FILE))?;

    let config_path = dir.join(CONFIG_FILE);
    write_new_file(&config_path, &render_bee_config(&password))
        .map_err(|e| GenerateError::io(&config_path, e))?;

    debug!(node = %node.id(), %address, "node ready");
    Ok(address)
}

/// One address per line, trailing newline
pub fn render_addresses(addresses: &[String]) -> String {
    let mut out = addresses.join("\n");
    out.push('\n');
    out
}
