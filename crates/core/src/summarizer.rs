use actionbar_models::{FileEntry, SelectionSummary};

/// Folds a selection into counts and sizes in a single pass.
///
/// Entries are visited in the order given; the first one names the summary.
/// A folder without a known item count makes the folder total unknown for
/// the whole selection, no matter what later folders report.
#[must_use]
pub fn summarize<'a, I>(entries: I) -> SelectionSummary
where
    I: IntoIterator<Item = &'a FileEntry>,
{
    let mut summary = SelectionSummary::default();

    for entry in entries {
        if entry.is_directory {
            summary.folder_count += 1;

            match entry.known_item_count() {
                Some(count) => summary.folder_item_count = summary.folder_item_count.saturating_add(count),
                None => summary.folder_item_count_known = false,
            }
        } else {
            summary.non_folder_count += 1;

            if entry.can_get_size() {
                summary.non_folder_size_known = true;
                summary.non_folder_size = summary.non_folder_size.saturating_add(entry.size.unwrap_or_default());
            }
        }

        if summary.first_item_name.is_none() {
            summary.first_item_name = Some(entry.display_name.to_string());
        }
    }

    summary
}
