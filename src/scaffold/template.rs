//! The embedded application template.

use include_dir::{include_dir, Dir, File};
use std::path::{Path, PathBuf};

use crate::error::{Result, ZkwasmError};

use super::ProjectScaffolder;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Name of the only bundled template.
pub const DEFAULT_TEMPLATE: &str = "app";

/// Values substituted into template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// Project (package) name, e.g. `my-app`.
    pub name: String,
    /// Rust identifier form of the name, e.g. `my_app`.
    pub crate_name: String,
    /// One-line package description.
    pub description: String,
}

impl TemplateVars {
    /// Variables for `name`, with a generated description when none is given.
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            crate_name: crate_name_for(name),
            description: description
                .map(String::from)
                .unwrap_or_else(|| format!("{} zkWasm application", name)),
        }
    }

    /// Replace `{{name}}`, `{{crate_name}}` and `{{description}}`.
    pub fn render(&self, content: &str) -> String {
        content
            .replace("{{crate_name}}", &self.crate_name)
            .replace("{{name}}", &self.name)
            .replace("{{description}}", &self.description)
    }
}

/// Convert a package name to a Rust crate identifier.
pub fn crate_name_for(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Map a template path to its destination path.
///
/// A leading `_` on the first component becomes `.`, and a `.tmpl` suffix
/// is stripped, so the embedded tree carries no dotfiles or manifests.
pub fn destination_path(template_path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut components = template_path.components().peekable();
    let mut first = true;

    while let Some(component) = components.next() {
        let mut part = component.as_os_str().to_string_lossy().to_string();
        if first {
            if let Some(rest) = part.strip_prefix('_') {
                part = format!(".{}", rest);
            }
            first = false;
        }
        if components.peek().is_none() {
            if let Some(stripped) = part.strip_suffix(".tmpl") {
                part = stripped.to_string();
            }
        }
        out.push(part);
    }

    out
}

/// Scaffolder backed by a template compiled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedTemplate {
    dir: &'static Dir<'static>,
}

impl EmbeddedTemplate {
    /// Look up a bundled template by name.
    pub fn named(name: &str) -> Result<Self> {
        TEMPLATES_DIR
            .get_dir(name)
            .map(|dir| Self { dir })
            .ok_or_else(|| ZkwasmError::TemplateError {
                message: format!("Unknown template '{}'", name),
            })
    }

    /// The default application template.
    pub fn app() -> Result<Self> {
        Self::named(DEFAULT_TEMPLATE)
    }

    fn collect_files(dir: &'static Dir<'static>, files: &mut Vec<&'static File<'static>>) {
        files.extend(dir.files());
        for sub in dir.dirs() {
            Self::collect_files(sub, files);
        }
    }

    /// Template files with paths relative to the template root.
    pub fn files(&self) -> Vec<(PathBuf, &'static File<'static>)> {
        let mut files = Vec::new();
        Self::collect_files(self.dir, &mut files);

        let root = self.dir.path();
        let mut entries: Vec<_> = files
            .into_iter()
            .map(|file| {
                let relative = file.path().strip_prefix(root).unwrap_or(file.path());
                (relative.to_path_buf(), file)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl ProjectScaffolder for EmbeddedTemplate {
    fn scaffold(&self, target: &Path, vars: &TemplateVars) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (relative, file) in self.files() {
            let content = file.contents_utf8().ok_or_else(|| ZkwasmError::TemplateError {
                message: format!("Template file {} is not valid UTF-8", relative.display()),
            })?;

            let dest_relative = destination_path(&relative);
            let dest = target.join(&dest_relative);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&dest, vars.render(content))?;
            tracing::debug!("Wrote {}", dest.display());
            written.push(dest_relative);
        }

        Ok(written)
    }
}
