//! List command implementation

use super::{Command, CommandContext};
use crate::gist::GistResponse;
use crate::utils::short_date;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Output format for a gist in JSON mode
#[derive(Serialize)]
struct GistOutput {
    id: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_at: String,
    public: bool,
    files: Vec<String>,
}

/// List command for displaying gists
pub struct ListCommand {
    /// List this user's public gists instead of the authenticated user's
    pub user: Option<String>,
    /// Output in JSON format
    pub json: bool,
}

/// Render one gist as the permalink line followed by `(date)\tdescription`
///
/// Unparseable creation dates are shown as received.
pub fn format_gist_entry(gist: &GistResponse) -> String {
    let date = short_date(&gist.created_at).unwrap_or_else(|_| gist.created_at.clone());
    format!(
        "{}\n({})\t{}",
        gist.html_url,
        date,
        gist.description.as_deref().unwrap_or("")
    )
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let gists = context.client.list_gists(self.user.as_deref()).await?;

        if self.json {
            let output: Vec<GistOutput> = gists
                .iter()
                .map(|gist| GistOutput {
                    id: gist.id.clone(),
                    url: gist.html_url.clone(),
                    description: gist.description.clone(),
                    created_at: gist.created_at.clone(),
                    public: gist.public,
                    files: gist.files.keys().cloned().collect(),
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        for gist in &gists {
            println!("{}", format_gist_entry(gist));
            println!();
        }

        Ok(())
    }
}
