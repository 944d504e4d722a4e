//! Shared plumbing for the bee-kit command-line tools
//!
//! - `logging`: tracing subscriber setup and the common log flags
//! - `cli`: argument parsing and exit-code handling
//! - `fs`: create-only filesystem helpers

pub mod cli;
pub mod fs;
pub mod logging;

pub use cli::{finish, parse_args, EXIT_FAILURE};
pub use logging::{init_tracing, LogArgs};
