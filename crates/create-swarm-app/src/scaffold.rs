//! Project directory creation

use std::fs;
use std::path::{Path, PathBuf};

use beekit_common::fs::{create_fresh_dir, is_already_exists, write_new_file};
use tracing::{debug, info};

use crate::error::ScaffoldError;
use crate::manifest::PackageJson;
use crate::sources::{
    render_config, render_index, APP_TSX, INDEX_HTML, INDEX_TSX, NODE_TSCONFIG, VITE_TSCONFIG,
};
use crate::template::{CodeType, ProjectType, TemplateKind};

/// A file to write, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: &'static str,
    pub contents: String,
}

impl ProjectFile {
    fn new(path: &'static str, contents: impl Into<String>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }
}

/// Every file of a `kind` project named `name`, `package.json` first
pub fn project_files(name: &str, kind: TemplateKind) -> Result<Vec<ProjectFile>, ScaffoldError> {
    let code = kind.code_type();
    let mut files = vec![ProjectFile::new(
        "package.json",
        PackageJson::new(name, kind).render()?,
    )];

    match (kind.project_type(), code) {
        (ProjectType::Vite, _) => files.extend([
            ProjectFile::new("src/App.tsx", APP_TSX),
            ProjectFile::new("src/index.tsx", INDEX_TSX),
            ProjectFile::new("src/config.ts", render_config(code)),
            ProjectFile::new("tsconfig.json", VITE_TSCONFIG),
            ProjectFile::new("index.html", INDEX_HTML),
        ]),
        (ProjectType::Node, CodeType::TypeScript) => files.extend([
            ProjectFile::new("tsconfig.json", NODE_TSCONFIG),
            ProjectFile::new("src/index.ts", render_index(code)),
            ProjectFile::new("src/config.ts", render_config(code)),
        ]),
        (ProjectType::Node, _) => files.extend([
            ProjectFile::new("src/index.js", render_index(code)),
            ProjectFile::new("src/config.js", render_config(code)),
        ]),
    }
    Ok(files)
}

/// Create `<parent>/<name>` and write the template into it.
///
/// The project directory must not exist. Returns its path.
pub fn scaffold(parent: &Path, name: &str, kind: TemplateKind) -> Result<PathBuf, ScaffoldError> {
    let root = parent.join(name);
    if root.exists() {
        return Err(ScaffoldError::ProjectExists(root));
    }
    let files = project_files(name, kind)?;

    fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    create_fresh_dir(&root).map_err(|e| {
        if is_already_exists(&e) {
            ScaffoldError::ProjectExists(root.clone())
        } else {
            ScaffoldError::io(&root, e)
        }
    })?;
    let src = root.join("src");
    create_fresh_dir(&src).map_err(|e| ScaffoldError::io(&src, e))?;

    for file in &files {
        let path = root.join(file.path);
        write_new_file(&path, &file.contents).map_err(|e| ScaffoldError::io(&path, e))?;
        debug!(path = %path.display(), bytes = file.contents.len(), "wrote file");
    }
    info!(project = %root.display(), template = %kind, files = files.len(), "project created");
    Ok(root)
}

/// Lines printed after a successful scaffold
pub fn next_steps(name: &str) -> [String; 5] {
    [
        "Project created".to_string(),
        String::new(),
        format!("cd {}", name),
        "npm install".to_string(),
        "npm start".to_string(),
    ]
}
