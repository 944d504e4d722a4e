//! `package.json` generation
//!
//! Keys keep insertion order and the document is indented with four spaces,
//! without a trailing newline.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ScaffoldError;
use crate::slug::slugify;
use crate::template::{CodeType, ProjectType, TemplateKind};

const BEE_JS: (&str, &str) = ("@ethersphere/bee-js", "^8.2.0");
const REACT_VERSION: &str = "^18.3.1";

#[derive(Debug, Serialize)]
pub struct Scripts {
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: &'static str,
    pub scripts: Scripts,
    pub license: &'static str,
    pub dependencies: Map<String, Value>,
    pub dev_dependencies: Map<String, Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<&'static str>,
}

fn insert(map: &mut Map<String, Value>, name: &str, version: &str) {
    map.insert(name.to_string(), Value::String(version.to_string()));
}

impl PackageJson {
    pub fn new(project_name: &str, kind: TemplateKind) -> Self {
        let code = kind.code_type();
        let project = kind.project_type();

        let mut dependencies = Map::new();
        insert(&mut dependencies, BEE_JS.0, BEE_JS.1);
        let mut dev_dependencies = Map::new();

        if code == CodeType::TypeScript {
            insert(&mut dev_dependencies, "typescript", "^5.5.3");
        }
        if project == ProjectType::Vite {
            insert(&mut dependencies, "react", REACT_VERSION);
            insert(&mut dependencies, "react-dom", REACT_VERSION);
            insert(&mut dev_dependencies, "@types/react", "^18.3.3");
            insert(&mut dev_dependencies, "@types/react-dom", "^18.3.0");
            insert(&mut dev_dependencies, "vite", "^5.3.4");
        }
        if kind == TemplateKind::NodeTs {
            insert(&mut dev_dependencies, "ts-node", "^10.9.2");
        }

        let scripts = match kind {
            TemplateKind::ViteTsx => Scripts {
                start: "vite",
                build: Some("vite build"),
                check: Some("tsc --noEmit"),
            },
            TemplateKind::NodeTs => Scripts {
                start: "ts-node src/index.ts",
                build: Some("tsc"),
                check: Some("tsc --noEmit"),
            },
            TemplateKind::Node => Scripts {
                start: "node src/index.js",
                build: None,
                check: None,
            },
            TemplateKind::NodeEsm => Scripts {
                start: "node --experimental-specifier-resolution=node src/index.js",
                build: None,
                check: None,
            },
        };

        Self {
            name: slugify(project_name),
            version: "1.0.0",
            scripts,
            license: "ISC",
            dependencies,
            dev_dependencies,
            module_type: (code == CodeType::EsModules).then_some("module"),
        }
    }

    /// Four-space pretty JSON, no trailing newline
    pub fn render(&self) -> Result<String, ScaffoldError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
