//! Gist API integration module
//!
//! - [`client`]: Core client holding the HTTP connection, base URL and token
//! - [`gists`]: List, create, update, delete and fetch operations
//! - [`types`]: Request payloads and response shapes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gost::gist::GistClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GistClient::new("https://api.github.com", None);
//! for gist in client.list_gists(Some("octocat")).await? {
//!     println!("{}", gist.html_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod gists;
pub mod types;

pub use client::GistClient;
pub use types::{
    ChangeStatus, DeleteOutcome, ErrorMessage, FileContent, GistFile, GistRequest, GistResponse,
    HistoryEntry, ResponseFile,
};
