mod action_bar;
mod collaborators;
mod memory;

pub use action_bar::{ActionBar, Collaborators, Notifier};
pub use collaborators::{
    ChangeListener, ClipboardListener, ClipboardMonitor, DisplaySink, ListenerId, Previewer, SelectionView,
};
pub use memory::{MemoryClipboard, MemoryView};
