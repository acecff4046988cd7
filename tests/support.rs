//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across integration tests.

#![allow(dead_code)]

use anyhow::{Result, bail};
use gost::{CommandContext, Desktop, GistClient};
use serde_json::{Value, json};
use std::process::Command;
use std::sync::{Arc, Mutex};

/// Desktop fake that records every clipboard write and browser launch
#[derive(Default)]
pub struct RecordingDesktop {
    pub copied: Mutex<Vec<String>>,
    pub opened: Mutex<Vec<String>>,
    /// Make every call fail, as on a headless machine
    pub unavailable: bool,
}

impl RecordingDesktop {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Desktop for RecordingDesktop {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        if self.unavailable {
            bail!("no clipboard");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn open_in_browser(&self, url: &str) -> Result<()> {
        if self.unavailable {
            bail!("no browser");
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Build a command context against `base_url` with a recording desktop
pub fn create_test_context(
    base_url: &str,
    token: Option<&str>,
) -> (CommandContext, Arc<RecordingDesktop>) {
    create_test_context_with(base_url, token, RecordingDesktop::default())
}

pub fn create_test_context_with(
    base_url: &str,
    token: Option<&str>,
    desktop: RecordingDesktop,
) -> (CommandContext, Arc<RecordingDesktop>) {
    let desktop = Arc::new(desktop);
    let client = GistClient::new(base_url, token.map(str::to_string));
    let context = CommandContext::new(client, desktop.clone());
    (context, desktop)
}

/// A gist response body as the API returns it
pub fn gist_json(id: &str, files: &[(&str, &str)], history: &[(u64, u64)]) -> Value {
    let files: serde_json::Map<String, Value> = files
        .iter()
        .map(|(name, content)| {
            (
                name.to_string(),
                json!({
                    "filename": name,
                    "type": "text/plain",
                    "size": content.len(),
                    "content": content,
                }),
            )
        })
        .collect();

    let history: Vec<Value> = history
        .iter()
        .enumerate()
        .map(|(i, (additions, deletions))| {
            json!({
                "version": format!("v{}", history.len() - i),
                "committed_at": "2021-03-04T10:00:00Z",
                "change_status": {
                    "additions": additions,
                    "deletions": deletions,
                    "total": additions + deletions,
                },
            })
        })
        .collect();

    json!({
        "id": id,
        "html_url": format!("https://gist.example.com/{}", id),
        "description": "test gist",
        "public": true,
        "files": files,
        "created_at": "2021-03-04T10:00:00Z",
        "history": history,
    })
}

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gost CLI with given arguments and no ambient configuration
pub fn run_cli(args: &[&str], home: &std::path::Path) -> CliOutput {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .env_remove("GITHUB_TOKEN")
        .env_remove("GIST_API_URL")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
