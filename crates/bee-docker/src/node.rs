//! Node identities and host port allocation
//!
//! Node `i` (0-based) is published as `bee_NN` with `NN = i + 1` padded to two
//! digits, and gets the host port triple `1633 + 3i`, `1634 + 3i`, `1635 + 3i`.

use crate::error::GenerateError;

/// Bee API port inside the container
pub const API_PORT: u16 = 1633;
/// Bee p2p port inside the container
pub const P2P_PORT: u16 = 1634;
/// Bee debug API port inside the container
pub const DEBUG_PORT: u16 = 1635;

/// Distance between consecutive nodes' host ports
pub const PORT_STRIDE: u16 = 3;

/// Largest count whose last debug port still fits in a `u16`
pub const MAX_NODES: usize = ((u16::MAX - DEBUG_PORT) / PORT_STRIDE) as usize + 1;

/// Host-side ports published for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPorts {
    pub api: u16,
    pub p2p: u16,
    pub debug: u16,
}

/// One node of the generated deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    index: usize,
    ports: HostPorts,
}

impl NodeSpec {
    /// Node at 0-based `index`, or `None` once its ports would overflow
    pub fn new(index: usize) -> Option<Self> {
        let offset = u16::try_from(index).ok()?.checked_mul(PORT_STRIDE)?;
        let ports = HostPorts {
            api: API_PORT.checked_add(offset)?,
            p2p: P2P_PORT.checked_add(offset)?,
            debug: DEBUG_PORT.checked_add(offset)?,
        };
        Some(Self { index, ports })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based node number
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Zero-padded node number, e.g. `07`
    pub fn id(&self) -> String {
        format!("{:02}", self.number())
    }

    pub fn dir_name(&self) -> String {
        format!("node_{}", self.id())
    }

    pub fn service_name(&self) -> String {
        format!("bee_{}", self.id())
    }

    pub fn container_name(&self) -> String {
        format!("bee-node_{}", self.id())
    }

    pub fn ports(&self) -> HostPorts {
        self.ports
    }
}

/// Nodes `0..count`, rejecting counts outside `1..=MAX_NODES`
pub fn plan_nodes(count: usize) -> Result<Vec<NodeSpec>, GenerateError> {
    if count == 0 || count > MAX_NODES {
        return Err(GenerateError::InvalidCount(count));
    }
    (0..count)
        .map(|index| NodeSpec::new(index).ok_or(GenerateError::InvalidCount(count)))
        .collect()
}

/// clap value parser for the node count argument
pub fn parse_node_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .trim()
        .parse()
        .map_err(|_| "Please provide a number".to_string())?;
    if count == 0 || count > MAX_NODES {
        return Err(format!("node count must be between 1 and {}", MAX_NODES));
    }
    Ok(count)
}
