//! Utility modules for common functionality

pub mod dates;
pub mod filesystem;
pub mod gist_id;
pub mod sanitizers;

// Re-export commonly used functions
pub use dates::short_date;
pub use filesystem::{ensure_directory_exists, write_file_with_mode};
pub use gist_id::extract_gist_id;
pub use sanitizers::{is_safe_file_name, redact_access_token};
