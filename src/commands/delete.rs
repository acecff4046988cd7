//! Delete command implementation

use super::{Command, CommandContext};
use crate::gist::DeleteOutcome;
use crate::utils::extract_gist_id;
use anyhow::{Result, bail};
use async_trait::async_trait;
use colored::*;

/// Delete command for removing a gist
pub struct DeleteCommand {
    /// Gist permalink or bare id
    pub gist: String,
}

#[async_trait]
impl Command for DeleteCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let id = extract_gist_id(&self.gist)?;

        match context.client.delete_gist(&id).await? {
            DeleteOutcome::Deleted => {
                println!("{}", "Gist deleted with success".green());
                Ok(())
            }
            DeleteOutcome::NotFound => bail!("Could not find gist {}", id),
        }
    }
}
