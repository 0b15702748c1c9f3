use actionbar_models::{ChangeSource, ClipboardInfo, FileEntry};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::collaborators::{ChangeListener, ClipboardListener, ClipboardMonitor, ListenerId, SelectionView};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Listeners<L> {
    next_id: u64,
    connected: Vec<(ListenerId, L)>,
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self {
            next_id: 0,
            connected: Vec::new(),
        }
    }
}

impl<L: Clone> Listeners<L> {
    fn connect(&mut self, listener: L) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.connected.push((id, listener));
        id
    }

    fn disconnect(&mut self, id: ListenerId) {
        self.connected.retain(|(connected, _)| *connected != id);
    }

    fn snapshot(&self) -> Vec<L> {
        self.connected.iter().map(|(_, listener)| listener.clone()).collect()
    }
}

#[derive(Debug, Default, Clone)]
struct ViewState {
    selection: Vec<FileEntry>,
    is_loading: bool,
    is_searching: bool,
}

/// Thread-safe in-memory file view.
///
/// Setters update the state first and then notify listeners, outside the lock.
#[derive(Default)]
pub struct MemoryView {
    state: Mutex<ViewState>,
    listeners: Mutex<Listeners<ChangeListener>>,
}

impl MemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selection(&self, selection: Vec<FileEntry>) {
        lock(&self.state).selection = selection;
        self.emit(ChangeSource::Selection);
    }

    pub fn set_loading(&self, is_loading: bool) {
        lock(&self.state).is_loading = is_loading;
        self.emit(ChangeSource::Loading);
    }

    pub fn set_searching(&self, is_searching: bool) {
        lock(&self.state).is_searching = is_searching;
        self.emit(ChangeSource::Searching);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).connected.len()
    }

    fn emit(&self, source: ChangeSource) {
        let listeners = lock(&self.listeners).snapshot();
        for listener in listeners {
            listener(source);
        }
    }
}

impl SelectionView for MemoryView {
    fn selection(&self) -> Vec<FileEntry> {
        lock(&self.state).selection.clone()
    }

    fn is_loading(&self) -> bool {
        lock(&self.state).is_loading
    }

    fn is_searching(&self) -> bool {
        lock(&self.state).is_searching
    }

    fn connect(&self, listener: ChangeListener) -> ListenerId {
        lock(&self.listeners).connect(listener)
    }

    fn disconnect(&self, id: ListenerId) {
        lock(&self.listeners).disconnect(id);
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    info: Mutex<Option<ClipboardInfo>>,
    listeners: Mutex<Listeners<ClipboardListener>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, info: Option<ClipboardInfo>) {
        *lock(&self.info) = info;
        let listeners = lock(&self.listeners).snapshot();
        for listener in listeners {
            listener();
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).connected.len()
    }
}

impl ClipboardMonitor for MemoryClipboard {
    fn clipboard_info(&self) -> Option<ClipboardInfo> {
        lock(&self.info).clone()
    }

    fn connect(&self, listener: ClipboardListener) -> ListenerId {
        lock(&self.listeners).connect(listener)
    }

    fn disconnect(&self, id: ListenerId) {
        lock(&self.listeners).disconnect(id);
    }
}
