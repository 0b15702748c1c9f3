use serde::Serialize;

/// Aggregate view of a multi-entry selection, rebuilt on every status evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub folder_count: u32,
    pub folder_item_count: u32,
    /// False as soon as one folder could not report its item count.
    pub folder_item_count_known: bool,
    pub non_folder_count: u32,
    pub non_folder_size: u64,
    pub non_folder_size_known: bool,
    pub first_item_name: Option<String>,
}

impl Default for SelectionSummary {
    fn default() -> Self {
        Self {
            folder_count: 0,
            folder_item_count: 0,
            folder_item_count_known: true,
            non_folder_count: 0,
            non_folder_size: 0,
            non_folder_size_known: false,
            first_item_name: None,
        }
    }
}

impl SelectionSummary {
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.folder_count) + u64::from(self.non_folder_count)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    #[must_use]
    pub fn first_item_name(&self) -> &str {
        self.first_item_name.as_deref().unwrap_or_default()
    }
}
