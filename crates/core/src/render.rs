//! Turns selection state into the strings shown by the action bar.

use actionbar_models::{ClipboardInfo, FileEntry, Preview, SelectionSummary, SingleSelection};
use actionbar_utils::{format_bytes, format_count};

use crate::catalog::{Catalog, fill};

/// Composes the multi-selection status line.
///
/// Returns `None` for an empty summary; callers show the idle page instead.
/// Unknown item counts and sizes drop their parenthetical rather than
/// rendering as zero.
#[must_use]
pub fn render(summary: &SelectionSummary, catalog: &dyn Catalog) -> Option<String> {
    let folders = (summary.folder_count > 0)
        .then(|| join_phrase(folder_phrase(summary, catalog), folder_suffix(summary, catalog)));
    let others = (summary.non_folder_count > 0)
        .then(|| join_phrase(non_folder_phrase(summary, catalog), non_folder_suffix(summary, catalog)));

    match (folders, others) {
        (Some(folders), Some(others)) => Some(fill(
            &catalog.gettext("{folders}, {others}"),
            &[("folders", folders.as_str()), ("others", others.as_str())],
        )),
        (Some(group), None) | (None, Some(group)) => Some(group),
        (None, None) => None,
    }
}

fn join_phrase(phrase: String, suffix: Option<String>) -> String {
    match suffix {
        Some(suffix) => format!("{phrase} {suffix}"),
        None => phrase,
    }
}

fn selected_name(name: &str, catalog: &dyn Catalog) -> String {
    fill(&catalog.gettext("“{name}” selected"), &[("name", name)])
}

fn folder_phrase(summary: &SelectionSummary, catalog: &dyn Catalog) -> String {
    if summary.folder_count == 1 && summary.non_folder_count == 0 {
        return selected_name(summary.first_item_name(), catalog);
    }

    let n = u64::from(summary.folder_count);
    fill(
        &catalog.ngettext("{count} folder selected", "{count} folders selected", n),
        &[("count", format_count(n).as_str())],
    )
}

fn folder_suffix(summary: &SelectionSummary, catalog: &dyn Catalog) -> Option<String> {
    if !summary.folder_item_count_known {
        return None;
    }

    let n = u64::from(summary.folder_item_count);
    let template = if summary.folder_count == 1 {
        catalog.ngettext("(containing {count} item)", "(containing {count} items)", n)
    } else {
        catalog.ngettext(
            "(containing a total of {count} item)",
            "(containing a total of {count} items)",
            n,
        )
    };
    Some(fill(&template, &[("count", format_count(n).as_str())]))
}

fn is_single_named_file(summary: &SelectionSummary) -> bool {
    summary.folder_count == 0 && summary.non_folder_count == 1
}

fn non_folder_phrase(summary: &SelectionSummary, catalog: &dyn Catalog) -> String {
    if is_single_named_file(summary) {
        return selected_name(summary.first_item_name(), catalog);
    }

    let n = u64::from(summary.non_folder_count);
    let template = if summary.folder_count == 0 {
        catalog.ngettext("{count} item selected", "{count} items selected", n)
    } else {
        // Folders are listed first, so the rest are "other" items
        catalog.ngettext("{count} other item selected", "{count} other items selected", n)
    };
    fill(&template, &[("count", format_count(n).as_str())])
}

fn non_folder_suffix(summary: &SelectionSummary, catalog: &dyn Catalog) -> Option<String> {
    if !summary.non_folder_size_known || is_single_named_file(summary) {
        return None;
    }

    Some(fill(
        &catalog.gettext("({size})"),
        &[("size", format_bytes(summary.non_folder_size).as_str())],
    ))
}

#[must_use]
pub fn loading_label(is_searching: bool, catalog: &dyn Catalog) -> String {
    if is_searching {
        catalog.gettext("Searching").into_owned()
    } else {
        catalog.gettext("Loading").into_owned()
    }
}

/// Second line of the single-selection page: item count for folders, size for files.
#[must_use]
pub fn describe_single(entry: &FileEntry, catalog: &dyn Catalog) -> Option<String> {
    if entry.is_directory {
        let n = u64::from(entry.known_item_count()?);
        Some(fill(
            &catalog.ngettext("Contains {count} item", "Contains {count} items", n),
            &[("count", format_count(n).as_str())],
        ))
    } else {
        entry.known_size().map(format_bytes)
    }
}

/// Builds the single-selection page for `entry`.
///
/// A thumbnail is used only when one exists and thumbnails are enabled;
/// opening the previewer is offered for thumbnailed files, never for folders.
#[must_use]
pub fn single_selection(entry: &FileEntry, show_thumbnail: bool, catalog: &dyn Catalog) -> SingleSelection {
    let (preview, has_thumbnail) = match &entry.thumbnail_path {
        Some(path) if show_thumbnail => (Preview::Thumbnail(path.clone()), true),
        _ => (Preview::Icon(entry.icon_name.clone()), false),
    };

    SingleSelection {
        name: entry.display_name.to_string(),
        description: describe_single(entry, catalog),
        preview,
        can_preview: has_thumbnail && !entry.is_directory,
    }
}

/// Label for the paste button; `None` hides it, also for an empty clipboard.
#[must_use]
pub fn paste_label(info: Option<&ClipboardInfo>, catalog: &dyn Catalog) -> Option<String> {
    let info = info.filter(|info| !info.is_empty())?;
    let n = info.len() as u64;

    let template = if info.cut {
        catalog.ngettext("Move {count} file", "Move {count} files", n)
    } else {
        catalog.ngettext("Paste {count} file", "Paste {count} files", n)
    };
    Some(fill(&template, &[("count", format_count(n).as_str())]))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::SourceCatalog;
    use crate::summarize;
    use std::borrow::Cow;
    use std::path::PathBuf;

    fn render_entries(entries: &[FileEntry]) -> Option<String> {
        render(&summarize(entries), &SourceCatalog)
    }

    #[test]
    fn test_empty_selection_has_no_text() {
        assert_eq!(render_entries(&[]), None);
    }

    #[test]
    fn test_single_file_uses_name_regardless_of_size() {
        assert_eq!(
            render_entries(&[FileEntry::file("a.txt", Some(100))]).as_deref(),
            Some("“a.txt” selected")
        );
        assert_eq!(
            render_entries(&[FileEntry::file("a.txt", None)]).as_deref(),
            Some("“a.txt” selected")
        );
    }

    #[test]
    fn test_single_folder_with_known_count() {
        assert_eq!(
            render_entries(&[FileEntry::directory("Photos", Some(12))]).as_deref(),
            Some("“Photos” selected (containing 12 items)")
        );
        assert_eq!(
            render_entries(&[FileEntry::directory("Photos", Some(1))]).as_deref(),
            Some("“Photos” selected (containing 1 item)")
        );
    }

    #[test]
    fn test_single_folder_with_unknown_count_omits_parenthetical() {
        let text = render_entries(&[FileEntry::directory("Photos", None)]).unwrap();
        assert_eq!(text, "“Photos” selected");
        assert!(!text.contains('0'));
    }

    #[test]
    fn test_several_folders() {
        let entries = [FileEntry::directory("a", Some(2)), FileEntry::directory("b", Some(3))];
        assert_eq!(
            render_entries(&entries).as_deref(),
            Some("2 folders selected (containing a total of 5 items)")
        );
    }

    #[test]
    fn test_several_folders_one_unknown() {
        let entries = [
            FileEntry::directory("a", Some(2)),
            FileEntry::directory("b", None),
            FileEntry::directory("c", Some(3)),
        ];
        assert_eq!(render_entries(&entries).as_deref(), Some("3 folders selected"));
    }

    #[test]
    fn test_several_files() {
        let entries = [FileEntry::file("a", Some(1024)), FileEntry::file("b", Some(512))];
        assert_eq!(render_entries(&entries).as_deref(), Some("2 items selected (1.50 KB)"));

        let entries = [FileEntry::file("a", None), FileEntry::file("b", None)];
        assert_eq!(render_entries(&entries).as_deref(), Some("2 items selected"));
    }

    #[test]
    fn test_folder_and_file() {
        let entries = [FileEntry::directory("Photos", Some(12)), FileEntry::file("a.txt", Some(100))];
        assert_eq!(
            render_entries(&entries).as_deref(),
            Some("1 folder selected (containing 12 items), 1 other item selected (100 B)")
        );
    }

    #[test]
    fn test_folders_and_files_plural_without_details() {
        let entries = [
            FileEntry::directory("a", None),
            FileEntry::directory("b", Some(1)),
            FileEntry::file("c", None),
            FileEntry::file("d", None),
            FileEntry::file("e", None),
        ];
        assert_eq!(
            render_entries(&entries).as_deref(),
            Some("2 folders selected, 3 other items selected")
        );
    }

    #[test]
    fn test_counts_are_grouped() {
        let summary = SelectionSummary {
            non_folder_count: 1500,
            first_item_name: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&summary, &SourceCatalog).as_deref(), Some("1,500 items selected"));
    }

    struct Pseudo;

    impl Catalog for Pseudo {
        fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
            match msgid {
                "{folders}, {others}" => Cow::Borrowed("{folders} / {others}"),
                "“{name}” selected" => Cow::Borrowed("«{name}» gewählt"),
                "Searching" => Cow::Borrowed("Suche"),
                other => Cow::Borrowed(other),
            }
        }

        fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> Cow<'a, str> {
            // A language that uses the singular for zero as well
            Cow::Borrowed(if n <= 1 { singular } else { plural })
        }
    }

    #[test]
    fn test_every_piece_goes_through_catalog() {
        let entries = [FileEntry::directory("a", Some(0)), FileEntry::file("b", Some(5))];
        assert_eq!(
            render(&summarize(&entries), &Pseudo).as_deref(),
            Some("1 folder selected (containing 0 item) / 1 other item selected (5 B)")
        );
        assert_eq!(
            render(&summarize(&[FileEntry::file("b", None)]), &Pseudo).as_deref(),
            Some("«b» gewählt")
        );
        assert_eq!(loading_label(true, &Pseudo), "Suche");
    }

    #[test]
    fn test_loading_label() {
        assert_eq!(loading_label(true, &SourceCatalog), "Searching");
        assert_eq!(loading_label(false, &SourceCatalog), "Loading");
    }

    #[test]
    fn test_describe_single() {
        assert_eq!(
            describe_single(&FileEntry::directory("d", Some(1)), &SourceCatalog).as_deref(),
            Some("Contains 1 item")
        );
        assert_eq!(
            describe_single(&FileEntry::directory("d", Some(2000)), &SourceCatalog).as_deref(),
            Some("Contains 2,000 items")
        );
        assert_eq!(describe_single(&FileEntry::directory("d", None), &SourceCatalog), None);
        assert_eq!(
            describe_single(&FileEntry::file("f", Some(2048)), &SourceCatalog).as_deref(),
            Some("2.00 KB")
        );
        assert_eq!(describe_single(&FileEntry::file("f", None), &SourceCatalog), None);
    }

    #[test]
    fn test_single_selection_with_thumbnail() {
        let entry = FileEntry::file("beach.jpg", Some(100)).with_thumbnail("/tmp/beach.jpg");
        let page = single_selection(&entry, true, &SourceCatalog);

        assert_eq!(page.name, "beach.jpg");
        assert_eq!(page.description.as_deref(), Some("100 B"));
        assert_eq!(page.preview, Preview::Thumbnail(PathBuf::from("/tmp/beach.jpg")));
        assert!(page.can_preview);
    }

    #[test]
    fn test_single_selection_thumbnails_disabled() {
        let entry = FileEntry::file("beach.jpg", Some(100))
            .with_thumbnail("/tmp/beach.jpg")
            .with_icon("image-x-generic");
        let page = single_selection(&entry, false, &SourceCatalog);

        assert_eq!(page.preview, Preview::Icon("image-x-generic".into()));
        assert!(!page.can_preview);
    }

    #[test]
    fn test_single_selection_folder_never_previewable() {
        let entry = FileEntry::directory("Photos", None).with_thumbnail("/tmp/folder.png");
        let page = single_selection(&entry, true, &SourceCatalog);

        assert_eq!(page.preview, Preview::Thumbnail(PathBuf::from("/tmp/folder.png")));
        assert!(!page.can_preview);
        assert_eq!(page.description, None);
    }

    #[test]
    fn test_paste_label() {
        assert_eq!(paste_label(None, &SourceCatalog), None);

        let copied = ClipboardInfo::new(vec!["file:///a".into()], false);
        assert_eq!(paste_label(Some(&copied), &SourceCatalog).as_deref(), Some("Paste 1 file"));

        let cut = ClipboardInfo::new(vec!["file:///a".into(), "file:///b".into()], true);
        assert_eq!(paste_label(Some(&cut), &SourceCatalog).as_deref(), Some("Move 2 files"));

        let nothing = ClipboardInfo::new(Vec::new(), false);
        assert_eq!(paste_label(Some(&nothing), &SourceCatalog), None);
    }
}
