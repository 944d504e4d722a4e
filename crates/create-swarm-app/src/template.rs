//! Template variants and the flags derived from them

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Accepted template tags, in the order they are listed to users
pub const POSSIBLE_TYPES: [&str; 4] = ["node", "node-esm", "node-ts", "vite-tsx"];

/// Module system of the generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeType {
    TypeScript,
    EsModules,
    CommonJs,
}

/// Runtime the project targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Node,
    Vite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Node,
    NodeEsm,
    NodeTs,
    ViteTsx,
}

impl TemplateKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::NodeEsm => "node-esm",
            Self::NodeTs => "node-ts",
            Self::ViteTsx => "vite-tsx",
        }
    }

    pub fn code_type(self) -> CodeType {
        let tag = self.tag();
        if tag.ends_with("ts") || tag.ends_with("tsx") {
            CodeType::TypeScript
        } else if tag.ends_with("esm") {
            CodeType::EsModules
        } else {
            CodeType::CommonJs
        }
    }

    pub fn project_type(self) -> ProjectType {
        if self.tag().starts_with("node") {
            ProjectType::Node
        } else {
            ProjectType::Vite
        }
    }
}

impl FromStr for TemplateKind {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Self::Node),
            "node-esm" => Ok(Self::NodeEsm),
            "node-ts" => Ok(Self::NodeTs),
            "vite-tsx" => Ok(Self::ViteTsx),
            other => Err(ScaffoldError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
