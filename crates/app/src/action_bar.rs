use actionbar_config::Settings;
use actionbar_core::render::{loading_label, paste_label, render, single_selection};
use actionbar_core::{Catalog, Debouncer, summarize};
use actionbar_models::{ChangeSource, DisplayState};
use color_eyre::eyre::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::{debug, info};

use crate::collaborators::{ClipboardMonitor, DisplaySink, ListenerId, Previewer, SelectionView};

/// External collaborators injected into an [`ActionBar`].
#[derive(Clone)]
pub struct Collaborators {
    pub view: Arc<dyn SelectionView>,
    pub sink: Arc<dyn DisplaySink>,
    pub clipboard: Arc<dyn ClipboardMonitor>,
    pub previewer: Arc<dyn Previewer>,
    pub catalog: Arc<dyn Catalog>,
}

struct Inner {
    view: Arc<dyn SelectionView>,
    sink: Arc<dyn DisplaySink>,
    clipboard: Arc<dyn ClipboardMonitor>,
    previewer: Arc<dyn Previewer>,
    catalog: Arc<dyn Catalog>,
    show_thumbnail: AtomicBool,
}

impl Inner {
    fn update_status(&self) -> DisplayState {
        let catalog = &*self.catalog;

        let state = if self.view.is_loading() {
            self.sink
                .set_loading_label(&loading_label(self.view.is_searching(), catalog));
            DisplayState::Loading
        } else {
            let selection = self.view.selection();
            match selection.as_slice() {
                [] => DisplayState::Normal,
                [entry] => {
                    let page = single_selection(entry, self.show_thumbnail.load(Ordering::Relaxed), catalog);
                    self.sink.show_single_selection(&page);
                    DisplayState::SingleSelection
                }
                entries => {
                    let label = render(&summarize(entries), catalog).unwrap_or_default();
                    self.sink.set_multi_selection_label(&label);
                    DisplayState::MultiSelection
                }
            }
        };

        self.sink.set_visible_state(state);
        debug!("Action bar: showing {}", state);
        state
    }

    fn update_paste_button(&self) {
        let info = self.clipboard.clipboard_info();
        let label = paste_label(info.as_ref(), &*self.catalog);
        self.sink.set_paste_label(label.as_deref());
    }
}

/// Cheap handle that forwards view changes into the debounced status update.
///
/// Holds only weak references, so a notifier that outlives its action bar
/// does nothing.
#[derive(Clone)]
pub struct Notifier {
    debouncer: Weak<Debouncer>,
    inner: Weak<Inner>,
}

impl Notifier {
    pub fn notify(&self, source: ChangeSource) {
        let Some(debouncer) = self.debouncer.upgrade() else {
            return;
        };

        debug!("Action bar: {} changed, rescheduling status update", source);
        let inner = self.inner.clone();
        debouncer.trigger(move || {
            if let Some(inner) = inner.upgrade() {
                inner.update_status();
            }
        });
    }
}

#[derive(Debug, Clone, Copy)]
struct Connections {
    view: ListenerId,
    clipboard: ListenerId,
}

/// Status area below a file view: what is selected, whether the view is
/// loading, and what the clipboard would paste.
///
/// View changes are coalesced and evaluated once the view has been quiet for
/// `Settings::update_delay_ms`. Clipboard changes apply immediately.
pub struct ActionBar {
    debouncer: Arc<Debouncer>,
    inner: Arc<Inner>,
    connections: Mutex<Option<Connections>>,
}

impl ActionBar {
    /// Connects to the view and clipboard and shows the current paste state.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn new(collaborators: Collaborators, settings: &Settings) -> Result<Self> {
        let Collaborators {
            view,
            sink,
            clipboard,
            previewer,
            catalog,
        } = collaborators;

        let debouncer = Arc::new(Debouncer::new(settings.update_delay())?);
        let inner = Arc::new(Inner {
            view,
            sink,
            clipboard,
            previewer,
            catalog,
            show_thumbnail: AtomicBool::new(settings.show_thumbnail),
        });

        inner.update_paste_button();

        let notifier = Notifier {
            debouncer: Arc::downgrade(&debouncer),
            inner: Arc::downgrade(&inner),
        };
        let view_id = inner
            .view
            .connect(Arc::new(move |source: ChangeSource| notifier.notify(source)));

        let weak = Arc::downgrade(&inner);
        let clipboard_id = inner.clipboard.connect(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.update_paste_button();
            }
        }));

        info!(
            "Action bar created (update delay: {:?}, thumbnails: {})",
            settings.update_delay(),
            settings.show_thumbnail
        );

        Ok(Self {
            debouncer,
            inner,
            connections: Mutex::new(Some(Connections {
                view: view_id,
                clipboard: clipboard_id,
            })),
        })
    }

    #[must_use]
    pub fn notifier(&self) -> Notifier {
        Notifier {
            debouncer: Arc::downgrade(&self.debouncer),
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Schedules a status update, replacing any update still waiting.
    pub fn notify(&self, source: ChangeSource) {
        self.notifier().notify(source);
    }

    /// Evaluates the view right away and returns the page that is now visible.
    pub fn update_status(&self) -> DisplayState {
        self.inner.update_status()
    }

    pub fn clipboard_changed(&self) {
        self.inner.update_paste_button();
    }

    #[must_use]
    pub fn is_update_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[must_use]
    pub fn show_thumbnail(&self) -> bool {
        self.inner.show_thumbnail.load(Ordering::Relaxed)
    }

    /// Returns whether the value changed.
    pub fn set_show_thumbnail(&self, show_thumbnail: bool) -> bool {
        let previous = self.inner.show_thumbnail.swap(show_thumbnail, Ordering::Relaxed);
        previous != show_thumbnail
    }

    /// Opens the previewer for the selection if exactly one entry is selected.
    ///
    /// Returns whether the previewer was asked to show a file.
    ///
    /// # Errors
    ///
    /// Propagates previewer failures.
    pub async fn open_preview(&self) -> Result<bool> {
        let selection = self.inner.view.selection();
        let [entry] = selection.as_slice() else {
            debug!("Action bar: preview needs exactly one entry, have {}", selection.len());
            return Ok(false);
        };

        self.inner.previewer.show_file(&entry.uri).await?;
        Ok(true)
    }

    /// Disconnects from the view and clipboard, then cancels any pending update.
    ///
    /// Safe to call more than once; also run on drop.
    pub fn shutdown(&self) {
        let connections = self
            .connections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(connections) = connections {
            self.inner.view.disconnect(connections.view);
            self.inner.clipboard.disconnect(connections.clipboard);
            let cancelled = self.debouncer.cancel();
            info!("Action bar shut down (pending update cancelled: {})", cancelled);
        }
    }
}

impl Drop for ActionBar {
    fn drop(&mut self) {
        self.shutdown();
    }
}
