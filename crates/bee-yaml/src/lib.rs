//! Static Bee configuration for a light mainnet node

/// The document printed by `bee-yaml`, without the final newline
pub const BEE_YAML: &str = r#"config: /etc/bee/bee.yaml
cors-allowed-origins: "*"
data-dir: /var/lib/bee
api-addr: 127.0.0.1:1633
debug-api-addr: 127.0.0.1:1635
debug-api-enable: true
full-node: false
password: "swarm"
swap-enable: false
blockchain-rpc-endpoint: https://xdai.fairdatasociety.org
verbosity: info
mainnet: true"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shape() {
        assert!(BEE_YAML.starts_with("config: /etc/bee/bee.yaml\n"));
        assert!(BEE_YAML.ends_with("mainnet: true"));
        assert_eq!(BEE_YAML.lines().count(), 12);
        assert!(BEE_YAML.lines().all(|line| line.contains(": ")));
    }

    #[test]
    fn test_light_node_settings() {
        assert!(BEE_YAML.contains("\nfull-node: false\n"));
        assert!(BEE_YAML.contains("\nswap-enable: false\n"));
        assert!(BEE_YAML.contains("\npassword: \"swarm\"\n"));
    }
}
