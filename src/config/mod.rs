pub mod fragment;
pub mod outbound;

use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads and parses the whole configuration file into a generic JSON tree.
pub fn load_config(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Pretty-prints `config` and atomically replaces the file at `path`.
///
/// Symlinks are followed, so the file they point at is the one replaced. The
/// document goes to a temporary file in the same directory, which is then
/// renamed over the target; on failure the original is left intact.
pub fn write_config(path: &Path, config: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let target = resolve_target(path);

    write_atomic(&target, json.as_bytes())
        .with_context(|| format!("failed to write config {}", path.display()))
}

fn write_atomic(target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = match NamedTempFile::new_in(dir) {
        Ok(tmp) => tmp,
        Err(e) if e.kind() == ErrorKind::PermissionDenied && target.exists() => {
            warn!(
                "Cannot create a temp file in {} ({}), rewriting {} in place",
                dir.display(),
                e,
                target.display()
            );
            return fs::write(target, bytes);
        }
        Err(e) => return Err(e),
    };

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

// Missing files resolve to themselves.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
