//! Tracing setup
//!
//! Diagnostics go to stderr. Standard output is reserved for what the tools
//! print on purpose, which for `bee-yaml` has to stay byte-exact.

use clap::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging flags shared by every tool
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// The logging level (trace|debug|info|warn|error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// The logging format (json|plain)
    #[arg(long, default_value = "plain")]
    pub log_format: String,

    /// Disable colored logs
    #[arg(long, default_value = "false")]
    pub log_no_color: bool,

    /// Print out the full error chain on failure
    #[arg(long, default_value = "false")]
    pub trace: bool,
}

impl LogArgs {
    /// Install the global subscriber described by these flags
    pub fn init(&self) {
        init_tracing(&self.log_level, &self.log_format, self.log_no_color);
    }
}

/// Parse a level name, falling back to `WARN` for anything unrecognized
pub fn parse_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides `log_level`.
pub fn init_tracing(log_level: &str, log_format: &str, no_color: bool) {
    let level = parse_level(log_level);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = match log_format {
        "json" => subscriber.json().try_init(),
        _ => subscriber.try_init(),
    };
}
