use std::sync::Arc;

/// Files currently held on the clipboard and whether they were cut or copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardInfo {
    pub uris: Vec<Arc<str>>,
    pub cut: bool,
}

impl ClipboardInfo {
    #[must_use]
    pub fn new(uris: Vec<Arc<str>>, cut: bool) -> Self {
        Self { uris, cut }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}
