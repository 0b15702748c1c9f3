mod bytes;
mod count;
pub mod media_types;

pub use bytes::format_bytes;
pub use count::format_count;
