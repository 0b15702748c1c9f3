use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// One selected file or folder as seen by the action bar.
///
/// Attributes that may be expensive to compute (a folder's item count) or
/// unavailable (a file's size) are optional; consumers treat `None` as
/// "unknown" rather than as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub uri: Arc<str>,
    pub display_name: Arc<str>,
    pub is_directory: bool,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub directory_item_count: Option<u32>,
    #[serde(default)]
    pub thumbnail_path: Option<PathBuf>,
    #[serde(default = "default_icon_name")]
    pub icon_name: Arc<str>,
}

fn default_icon_name() -> Arc<str> {
    "text-x-generic".into()
}

impl FileEntry {
    #[must_use]
    pub fn file(display_name: impl Into<Arc<str>>, size: Option<u64>) -> Self {
        Self {
            uri: "".into(),
            display_name: display_name.into(),
            is_directory: false,
            size,
            directory_item_count: None,
            thumbnail_path: None,
            icon_name: default_icon_name(),
        }
    }

    #[must_use]
    pub fn directory(display_name: impl Into<Arc<str>>, item_count: Option<u32>) -> Self {
        Self {
            uri: "".into(),
            display_name: display_name.into(),
            is_directory: true,
            size: None,
            directory_item_count: item_count,
            thumbnail_path: None,
            icon_name: "folder".into(),
        }
    }

    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<Arc<str>>) -> Self {
        self.uri = uri.into();
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, path: impl Into<PathBuf>) -> Self {
        self.thumbnail_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon_name: impl Into<Arc<str>>) -> Self {
        self.icon_name = icon_name.into();
        self
    }

    /// Directories never report a size, even if one was recorded.
    #[must_use]
    pub fn can_get_size(&self) -> bool {
        !self.is_directory && self.size.is_some()
    }

    #[must_use]
    pub fn known_size(&self) -> Option<u64> {
        if self.is_directory { None } else { self.size }
    }

    #[must_use]
    pub fn known_item_count(&self) -> Option<u32> {
        if self.is_directory {
            self.directory_item_count
        } else {
            None
        }
    }
}
