//! Filesystem helpers shared by the memory store and the evaluation runner.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Write `bytes` to `path` by writing a sibling temp file and renaming it over
/// the target, so readers never observe a half-written document.
///
/// Creates the parent directory if it does not exist.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);
    let mut file = std::fs::File::create(&temp_path)?;
    if let Err(e) = file.write_all(bytes).and_then(|()| file.flush()) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(file);

    // Atomic rename
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file atomically");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
