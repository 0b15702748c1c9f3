pub mod catalog;
mod debouncer;
mod entry_loader;
mod error;
pub mod render;
mod summarizer;

pub use catalog::{Catalog, SourceCatalog};
pub use debouncer::Debouncer;
pub use entry_loader::{load_entry, load_selection};
pub use error::{DebounceError, EntryError};
pub use summarizer::summarize;
