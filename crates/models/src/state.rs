use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Which page of the action bar is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayState {
    Normal,
    Loading,
    SingleSelection,
    MultiSelection,
}

impl DisplayState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Loading => "loading",
            Self::SingleSelection => "single-selection",
            Self::MultiSelection => "multi-selection",
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view property whose change warrants a status re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSource {
    Selection,
    Loading,
    Searching,
}

impl fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection => write!(f, "selection"),
            Self::Loading => write!(f, "is-loading"),
            Self::Searching => write!(f, "is-searching"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Thumbnail(PathBuf),
    Icon(Arc<str>),
}

/// Everything the single-selection page shows for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelection {
    pub name: String,
    /// `None` hides the second line entirely.
    pub description: Option<String>,
    pub preview: Preview,
    pub can_preview: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_state_names() {
        assert_eq!(DisplayState::Normal.to_string(), "normal");
        assert_eq!(DisplayState::Loading.to_string(), "loading");
        assert_eq!(DisplayState::SingleSelection.to_string(), "single-selection");
        assert_eq!(DisplayState::MultiSelection.to_string(), "multi-selection");
    }

    #[test]
    fn test_display_state_serializes_as_name() {
        let json = serde_json::to_string(&DisplayState::MultiSelection).unwrap_or_default();
        assert_eq!(json, "\"multi-selection\"");
    }

    #[test]
    fn test_change_source_display() {
        assert_eq!(ChangeSource::Selection.to_string(), "selection");
        assert_eq!(ChangeSource::Loading.to_string(), "is-loading");
        assert_eq!(ChangeSource::Searching.to_string(), "is-searching");
    }
}
