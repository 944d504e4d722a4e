//! Swarm starter project scaffolding
//!
//! `scaffold` creates a project directory from one of the four templates:
//! `node`, `node-esm`, `node-ts` and `vite-tsx`.

pub mod error;
pub mod manifest;
pub mod scaffold;
pub mod slug;
pub mod sources;
pub mod template;

pub use error::ScaffoldError;
pub use manifest::PackageJson;
pub use scaffold::{next_steps, project_files, scaffold, ProjectFile};
pub use slug::slugify;
pub use template::{CodeType, ProjectType, TemplateKind, POSSIBLE_TYPES};

/// Usage text printed when an argument is missing
pub fn usage() -> String {
    format!(
        "Usage:   npm init swarm-app <name> <type>\n\
         Example: npm init swarm-app my-app node-ts\n\
         \n\
         Possible types: {}",
        POSSIBLE_TYPES.join(", ")
    )
}
