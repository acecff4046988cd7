//! Gist API types
//!
//! Request payloads sent to the gist API and the response shapes it returns.
//! All of these live for a single request/response cycle.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named text file to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub name: String,
    pub content: String,
}

impl GistFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// File body inside a create/update payload, keyed by file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
}

/// Create/update payload
///
/// `public` is only sent on creation. On update the description is only sent
/// when one was given, so the remote description is otherwise left intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    pub files: BTreeMap<String, FileContent>,
}

impl GistRequest {
    /// Build a single-file creation payload
    pub fn create(file: GistFile, description: impl Into<String>, public: bool) -> Self {
        Self {
            description: Some(description.into()),
            public: Some(public),
            files: single_file(file),
        }
    }

    /// Build a single-file update payload
    pub fn update(file: GistFile, description: Option<String>) -> Self {
        Self {
            description,
            public: None,
            files: single_file(file),
        }
    }
}

fn single_file(file: GistFile) -> BTreeMap<String, FileContent> {
    let mut files = BTreeMap::new();
    files.insert(
        file.name,
        FileContent {
            content: file.content,
        },
    );
    files
}

/// A file as returned by the API
///
/// Listing endpoints omit the content, so it is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFile {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Line counts recorded for one revision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatus {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub total: u64,
}

/// One revision of a gist; the API returns the most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub committed_at: Option<String>,
    #[serde(default)]
    pub change_status: ChangeStatus,
}

/// Gist as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistResponse {
    #[serde(default)]
    pub id: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub files: BTreeMap<String, ResponseFile>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl GistResponse {
    /// Summary of the latest revision, e.g. `Revision 3 (2 deletions & 5 additions)`
    ///
    /// The revision number is the history length; the counts come from the
    /// most recent entry.
    ///
    /// # Errors
    /// Returns an error if the response carries no history
    pub fn revision_summary(&self) -> Result<String> {
        let latest = self
            .history
            .first()
            .ok_or_else(|| anyhow!("Gist {} has no revision history", self.html_url))?;

        Ok(format!(
            "Revision {} ({} deletions & {} additions)",
            self.history.len(),
            latest.change_status.deletions,
            latest.change_status.additions
        ))
    }
}

/// Error payload returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

/// Result of a delete request, decided by status code alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}
