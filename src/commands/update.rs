//! Update command implementation

use super::{Command, CommandContext};
use crate::gist::{GistFile, GistRequest};
use crate::utils::extract_gist_id;
use anyhow::Result;
use async_trait::async_trait;

/// Update command for replacing one file of an existing gist
pub struct UpdateCommand {
    /// Gist permalink or bare id
    pub gist: String,
    pub file: GistFile,
    /// New description; the remote one is kept when absent
    pub description: Option<String>,
    pub open_browser: bool,
}

#[async_trait]
impl Command for UpdateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let id = extract_gist_id(&self.gist)?;
        let request = GistRequest::update(self.file.clone(), self.description.clone());

        let gist = context.client.update_gist(&id, &request).await?;
        let summary = gist.revision_summary()?;

        context.copy_permalink(&gist.html_url);

        println!("{}", gist.html_url);
        println!("{}", summary);

        if self.open_browser {
            context.open_permalink(&gist.html_url);
        }

        Ok(())
    }
}
