use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Collects every regular file under `root`, recursively.
///
/// Hidden files are included and no ignore-file semantics apply: the scan
/// covers the whole tree. Directory entries that cannot be read are skipped
/// with a warning; the per-file tolerance lives in the scan loop itself.
pub fn discover_files(root: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);

    let files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .collect();

    debug!("Discovered {} files under {}", files.len(), root.display());
    files
}
