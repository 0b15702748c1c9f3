use actionbar_app::{DisplaySink, Previewer};
use actionbar_models::{DisplayState, Preview, SingleSelection};
use async_trait::async_trait;
use color_eyre::eyre::Result;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

/// Labels as they would currently be shown, plus the visible page.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    pub loading: String,
    pub file_name: String,
    pub description: Option<String>,
    pub preview: Option<String>,
    pub multi_selection: String,
    pub paste: Option<String>,
}

/// Collects labels and reports every page switch over a channel.
pub struct ConsoleSink {
    labels: Mutex<Labels>,
    shown: UnboundedSender<(DisplayState, Labels)>,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(shown: UnboundedSender<(DisplayState, Labels)>) -> Self {
        Self {
            labels: Mutex::new(Labels::default()),
            shown,
        }
    }

    fn with_labels(&self, update: impl FnOnce(&mut Labels)) {
        let mut labels = self.labels.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        update(&mut labels);
    }
}

impl DisplaySink for ConsoleSink {
    fn set_loading_label(&self, label: &str) {
        self.with_labels(|labels| labels.loading = label.to_string());
    }

    fn show_single_selection(&self, page: &SingleSelection) {
        let preview = match &page.preview {
            Preview::Thumbnail(path) => format!("thumbnail {}", path.display()),
            Preview::Icon(name) => format!("icon {name}"),
        };

        self.with_labels(|labels| {
            labels.file_name.clone_from(&page.name);
            labels.description.clone_from(&page.description);
            labels.preview = Some(preview);
        });
    }

    fn set_multi_selection_label(&self, label: &str) {
        self.with_labels(|labels| labels.multi_selection = label.to_string());
    }

    fn set_paste_label(&self, label: Option<&str>) {
        self.with_labels(|labels| labels.paste = label.map(str::to_string));
    }

    fn set_visible_state(&self, state: DisplayState) {
        let labels = self
            .labels
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        info!("Visible state: {}", state);
        // Receiver gone means the program is exiting
        let _ = self.shown.send((state, labels));
    }
}

/// Previewer that only records the request in the log.
pub struct LogPreviewer;

#[async_trait]
impl Previewer for LogPreviewer {
    async fn show_file(&self, uri: &str) -> Result<()> {
        info!("Preview requested for {}", uri);
        Ok(())
    }
}
