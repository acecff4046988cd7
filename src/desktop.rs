//! Clipboard and browser integration
//!
//! Commands reach the desktop through the [`Desktop`] trait so the side
//! effects can be replaced in tests.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::process::{Command, Stdio};

/// Desktop side effects used after a gist is published
pub trait Desktop: Send + Sync {
    /// Put `text` on the system clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    /// Open `url` in the default browser
    fn open_in_browser(&self, url: &str) -> Result<()>;
}

/// Desktop integration backed by the platform's clipboard utilities
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDesktop;

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(windows)]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Desktop for SystemDesktop {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        for (program, args) in CLIPBOARD_COMMANDS {
            if pipe_to(program, args, text).is_ok() {
                return Ok(());
            }
        }

        let tried: Vec<&str> = CLIPBOARD_COMMANDS.iter().map(|(p, _)| *p).collect();
        bail!("No clipboard utility available (tried {})", tried.join(", "))
    }

    fn open_in_browser(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Could not open browser for {}", url))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        bail!("{} exited with {}", program, status);
    }
    Ok(())
}
