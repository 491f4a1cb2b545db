pub mod config;
pub mod errors;
pub mod io;
pub mod layout;
pub mod logging;
pub mod text;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use layout::{split_paragraphs, Layout};
pub use text::{repeat, repeated, wrap, wrap_default, LineWrapper, Measure, WrapError};
