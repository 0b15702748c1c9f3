mod clipboard;
mod file_entry;
mod state;
mod summary;

pub use clipboard::ClipboardInfo;
pub use file_entry::FileEntry;
pub use state::{ChangeSource, DisplayState, Preview, SingleSelection};
pub use summary::SelectionSummary;
