//! `docker-compose.yml` rendering

use crate::node::{NodeSpec, API_PORT, DEBUG_PORT, P2P_PORT};

/// Render the service stanza for one node
pub fn render_service(node: &NodeSpec, image: &str, user: &str) -> String {
    let ports = node.ports();
    let dir = node.dir_name();
    [
        format!("    {}:", node.service_name()),
        format!("        container_name: {}", node.container_name()),
        format!("        image: {}", image),
        "        command: start --config /home/bee/bee.yml".to_string(),
        format!("        user: {}", user),
        "        volumes:".to_string(),
        format!("            - ./{}:/home/bee/", dir),
        "        ports:".to_string(),
        format!(
            "            - 127.0.0.1:{}:{} # bee api port",
            ports.api, API_PORT
        ),
        format!("            - {}:{} # p2p port", ports.p2p, P2P_PORT),
        format!(
            "            - 127.0.0.1:{}:{} # debug port",
            ports.debug, DEBUG_PORT
        ),
    ]
    .join("\n")
}

/// Render the whole compose file
pub fn render_compose(nodes: &[NodeSpec], image: &str, user: &str) -> String {
    let services: Vec<String> = nodes
        .iter()
        .map(|node| render_service(node, image, user))
        .collect();
    format!("services:\n{}\n", services.join("\n"))
}
