//! Multi-node Bee scaffolding
//!
//! For a node count N this crate produces, in an output directory:
//!
//! ```text
//! docker-compose.yml          one service per node
//! addresses.txt               node wallet addresses, in node order
//! node_01/
//!   bee.yml                   node configuration, including its password
//!   bee-data/keys/swarm.key   encrypted node wallet
//! node_02/
//!   ...
//! ```

pub mod bee_config;
pub mod compose;
pub mod error;
pub mod generate;
pub mod node;

pub use error::GenerateError;
pub use generate::{run, GenerateOptions, GenerateSummary};
pub use node::{parse_node_count, plan_nodes, HostPorts, NodeSpec, MAX_NODES};

/// Compose file name
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Address summary file name
pub const ADDRESSES_FILE: &str = "addresses.txt";

/// Default container image
pub const DEFAULT_IMAGE: &str = "ethersphere/bee:stable";
