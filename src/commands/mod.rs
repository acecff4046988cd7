//! Command implementations
//!
//! Each subcommand is a struct implementing [`Command`]; the shared
//! [`CommandContext`] carries the API client and desktop integration.

pub mod base;
pub mod delete;
pub mod download;
pub mod ls;
pub mod post;
pub mod update;
pub mod validators;

pub use base::{Command, CommandContext};
pub use delete::DeleteCommand;
pub use download::DownloadCommand;
pub use ls::ListCommand;
pub use post::{PostCommand, read_gist_file};
pub use update::UpdateCommand;
