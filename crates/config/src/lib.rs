mod settings;

pub use settings::{APP_NAME, DEFAULT_UPDATE_DELAY_MS, Settings};
