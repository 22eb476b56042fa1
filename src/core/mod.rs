// Public modules
pub mod app;
pub mod clean;
pub mod diagnostics;
pub mod error;
pub mod install;
pub mod local_files;
pub mod paths;
pub mod settings;
pub mod templates;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
