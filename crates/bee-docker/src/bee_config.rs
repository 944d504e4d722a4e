//! Per-node `bee.yml` and its password
//!
//! The password is a placeholder: `z` plus the tail of a throwaway wallet's
//! checksummed address. It only has to match between `bee.yml` and the
//! keystore written next to it. It is never taken from the node's own
//! address, which is published in `addresses.txt`.

use beekit_crypto::Wallet;

/// Node configuration file name, relative to the node directory
pub const CONFIG_FILE: &str = "bee.yml";

/// Keystore location, relative to the node directory
pub const KEYS_DIR: [&str; 2] = ["bee-data", "keys"];

/// Keystore file name inside [`KEYS_DIR`]
pub const KEY_FILE: &str = "swarm.key";

const PASSWORD_PREFIX: char = 'z';

/// Offset into the `0x`-prefixed 42-character address
const PASSWORD_OFFSET: usize = 23;

/// Length of every derived password
pub const PASSWORD_LENGTH: usize = 1 + 42 - PASSWORD_OFFSET;

/// Build a node password from a throwaway wallet
pub fn derive_password(seed: &Wallet) -> String {
    let address = seed.checksum_address();
    format!("{}{}", PASSWORD_PREFIX, &address[PASSWORD_OFFSET..])
}

/// Render `bee.yml` for a containerized mainnet full node
pub fn render_bee_config(password: &str) -> String {
    format!(
        r#"# GENERAL BEE CONFIGURATION
api-addr: :1633
p2p-addr: :1634
debug-api-addr: :1635
password: {password}
data-dir: /home/bee/bee-data
cors-allowed-origins: ["*"]

# DEBUG CONFIGURATION
debug-api-enable: true
verbosity: 5

# BEE MAINNET CONFIGURATION
bootnode: /dnsaddr/mainnet.ethswarm.org
blockchain-rpc-endpoint: https://xdai.fairdatasociety.org

# BEE MODE: FULL NODE CONFIGURATION
swap-enable: true
full-node: true
"#
    )
}

/// Pull the `password:` value back out of a rendered config
pub fn password_from_config(config: &str) -> Option<&str> {
    config
        .lines()
        .find_map(|line| line.strip_prefix("password: "))
        .map(str::trim)
}
