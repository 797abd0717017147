//! Project name detection from package manifests.
//!
//! Checks package.json, then Cargo.toml, then falls back to the directory name.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ManifestError;

/// The fields of package.json we care about.
#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// Name declared in `package.json`, without any `@scope/` prefix.
pub fn read_package_json_name(root: &Path) -> Result<Option<String>, ManifestError> {
    let path = root.join("package.json");
    if !path.exists() {
        return Ok(None);
    }

    let content = read_file(&path)?;
    let manifest: PackageJson =
        serde_json::from_str(&content).map_err(|e| ManifestError::ParseFailed {
            path: path.clone(),
            reason: format!("Invalid JSON: {}", e),
        })?;

    Ok(manifest.name.as_deref().and_then(clean_name))
}

/// Name declared in `Cargo.toml` under `[package]`.
pub fn read_cargo_name(root: &Path) -> Result<Option<String>, ManifestError> {
    let path = root.join("Cargo.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = read_file(&path)?;
    let doc: toml_edit::DocumentMut =
        content.parse().map_err(|e: toml_edit::TomlError| ManifestError::ParseFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok(doc
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
        .and_then(clean_name))
}

/// Repository name for `root`: package.json, then Cargo.toml, then the
/// directory's base name. Manifest errors are logged and skipped.
pub fn project_name(root: &Path) -> Option<String> {
    let sources: [(&str, fn(&Path) -> Result<Option<String>, ManifestError>); 2] = [
        ("package.json", read_package_json_name),
        ("Cargo.toml", read_cargo_name),
    ];

    for (label, read) in sources {
        match read(root) {
            Ok(Some(name)) => return Some(name),
            Ok(None) => {}
            Err(e) => debug!("Ignoring {}: {}", label, e),
        }
    }

    directory_name(root)
}

/// Base name of `root`, resolving `.` and relative paths first.
fn directory_name(root: &Path) -> Option<String> {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(clean_name)
}

/// Strip an npm scope and surrounding whitespace; empty names become `None`.
fn clean_name(name: &str) -> Option<String> {
    let name = name.trim();
    let name = match name.strip_prefix('@') {
        Some(scoped) => scoped.split_once('/').map(|(_, n)| n).unwrap_or(scoped),
        None => name,
    };

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn read_file(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|source| ManifestError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
