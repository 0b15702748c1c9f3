use actionbar_models::FileEntry;
use actionbar_utils::media_types::{generic_icon_name, is_thumbnailable};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::EntryError;

/// Builds a [`FileEntry`] for `path` from filesystem metadata.
///
/// Folders get their direct child count; a folder that cannot be listed is
/// reported with an unknown count instead of failing the whole entry.
///
/// # Errors
///
/// Returns [`EntryError::NotFound`] if `path` does not exist and
/// [`EntryError::Io`] if its metadata cannot be read.
pub async fn load_entry(path: &Path) -> Result<FileEntry, EntryError> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(EntryError::NotFound(path.to_path_buf())),
        Err(source) => {
            return Err(EntryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let display_name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .to_string();
    let uri = file_uri(path).await;

    if metadata.is_dir() {
        let item_count = count_children(path.to_path_buf()).await;
        debug!("Loaded folder {:?} (items: {:?})", path, item_count);
        return Ok(FileEntry::directory(display_name, item_count).with_uri(uri));
    }

    let extension = path.extension().map(|e| e.to_string_lossy()).unwrap_or_default();
    // Only regular files have a meaningful size
    let size = metadata.is_file().then_some(metadata.len());

    let mut entry = FileEntry::file(display_name.clone(), size)
        .with_uri(uri)
        .with_icon(generic_icon_name(&extension, false));
    if is_thumbnailable(&display_name) {
        entry = entry.with_thumbnail(path);
    }

    debug!("Loaded file {:?} (size: {:?})", path, size);
    Ok(entry)
}

/// Loads every path in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`EntryError`] encountered.
pub async fn load_selection<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<FileEntry>, EntryError> {
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        entries.push(load_entry(path.as_ref()).await?);
    }
    Ok(entries)
}

async fn file_uri(path: &Path) -> String {
    let absolute = tokio::fs::canonicalize(path).await.unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.to_string_lossy())
}

async fn count_children(path: PathBuf) -> Option<u32> {
    let result = tokio::task::spawn_blocking(move || {
        let mut count: u32 = 0;
        for entry in WalkDir::new(&path).min_depth(1).max_depth(1) {
            if let Err(e) = entry {
                warn!("Cannot count items in {:?}: {}", path, e);
                return None;
            }
            count = count.saturating_add(1);
        }
        Some(count)
    })
    .await;

    result.unwrap_or_else(|e| {
        warn!("Item count task failed: {}", e);
        None
    })
}
