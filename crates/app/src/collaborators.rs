use actionbar_models::{ChangeSource, ClipboardInfo, DisplayState, FileEntry, SingleSelection};
use async_trait::async_trait;
use color_eyre::Result;
use std::sync::Arc;

pub type ChangeListener = Arc<dyn Fn(ChangeSource) + Send + Sync>;
pub type ClipboardListener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by `connect`, used to disconnect the same listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The file view whose selection the action bar describes.
pub trait SelectionView: Send + Sync {
    fn selection(&self) -> Vec<FileEntry>;
    fn is_loading(&self) -> bool;
    fn is_searching(&self) -> bool;

    /// Registers `listener` for selection, loading and searching changes.
    fn connect(&self, listener: ChangeListener) -> ListenerId;
    fn disconnect(&self, id: ListenerId);
}

/// Passive display that receives rendered labels and the visible page.
pub trait DisplaySink: Send + Sync {
    fn set_loading_label(&self, label: &str);
    fn show_single_selection(&self, page: &SingleSelection);
    fn set_multi_selection_label(&self, label: &str);
    /// `None` hides the paste button.
    fn set_paste_label(&self, label: Option<&str>);
    fn set_visible_state(&self, state: DisplayState);
}

pub trait ClipboardMonitor: Send + Sync {
    fn clipboard_info(&self) -> Option<ClipboardInfo>;
    fn connect(&self, listener: ClipboardListener) -> ListenerId;
    fn disconnect(&self, id: ListenerId);
}

#[async_trait]
pub trait Previewer: Send + Sync {
    async fn show_file(&self, uri: &str) -> Result<()>;
}
