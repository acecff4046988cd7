//! Download command implementation

use super::{Command, CommandContext, validators};
use crate::constants::gist::DOWNLOAD_FILE_MODE;
use crate::utils::{ensure_directory_exists, extract_gist_id, write_file_with_mode};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Download command for writing every file of a gist locally
pub struct DownloadCommand {
    /// Gist permalink or bare id
    pub gist: String,
    /// Directory the files are written to
    pub output_dir: PathBuf,
}

#[async_trait]
impl Command for DownloadCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let id = extract_gist_id(&self.gist)?;
        let gist = context.client.get_gist(&id).await?;

        // Check every name before writing anything
        for file in gist.files.values() {
            validators::validate_file_name(&file.filename)?;
        }

        ensure_directory_exists(&self.output_dir)?;

        for file in gist.files.values() {
            println!("Downloading {}", file.filename);
            let content = file.content.as_deref().unwrap_or("");
            write_file_with_mode(
                &self.output_dir.join(&file.filename),
                content.as_bytes(),
                DOWNLOAD_FILE_MODE,
            )?;
        }

        Ok(())
    }
}
