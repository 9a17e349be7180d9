use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

/// Raw entry collected during scanning, before tree construction.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Full path to the file or folder
    pub path: PathBuf,
    /// File size in bytes (0 for folders; aggregated later)
    pub size: u64,
    /// Whether this entry is a folder
    pub is_dir: bool,
}

/// Walk `root` in parallel and collect every reachable entry.
///
/// Unreadable entries are skipped with a warning rather than aborting the
/// scan; a half-visible tree still makes a useful picture.
pub fn scan(root: &Path) -> Result<(PathBuf, Vec<RawEntry>)> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot resolve scan root {}", root.display()))?;

    tracing::info!("Scanning {}", root.display());
    let started = std::time::Instant::now();

    let mut entries = Vec::new();
    for item in WalkDir::new(&root).skip_hidden(false) {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if path == root {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                tracing::warn!("No metadata for {}: {err}", path.display());
                continue;
            }
        };
        let is_dir = meta.is_dir();
        let size = if is_dir { 0 } else { meta.len() };

        entries.push(RawEntry { path, size, is_dir });
    }

    let total_bytes: u64 = entries.iter().map(|e| e.size).sum();
    tracing::info!(
        "Scan finished: {} entries, {:.2} MB in {:?}",
        entries.len(),
        total_bytes as f64 / 1_048_576.0,
        started.elapsed()
    );

    Ok((root, entries))
}
