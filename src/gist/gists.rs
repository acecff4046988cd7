//! Gist API operations
//!
//! Each operation performs exactly one request and consumes the response
//! before returning.

use super::client::GistClient;
use super::types::{DeleteOutcome, ErrorMessage, GistRequest, GistResponse};
use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Method, Response, StatusCode};

impl GistClient {
    /// List gists
    ///
    /// Without a user this lists the authenticated user's gists, or the
    /// public gists when no token is configured. With a user it lists that
    /// user's public gists.
    pub async fn list_gists(&self, user: Option<&str>) -> Result<Vec<GistResponse>> {
        let request = match user {
            Some(user) => self.request(Method::GET, &["users", user, "gists"])?,
            None => self.request(Method::GET, &["gists"])?,
        };
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(api_error("Failed to list gists", response).await);
        }

        let gists: Vec<GistResponse> = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse gist list response")?;
        Ok(gists)
    }

    /// Create a new gist
    ///
    /// # Example
    /// ```rust,no_run
    /// use gost::gist::{GistClient, GistFile, GistRequest};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GistClient::new("https://api.github.com", Some("token".to_string()));
    /// let request = GistRequest::create(GistFile::new("hello.rs", "fn main() {}"), "demo", true);
    /// let gist = client.create_gist(&request).await?;
    /// println!("{}", gist.html_url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_gist(&self, request: &GistRequest) -> Result<GistResponse> {
        let response = self
            .send(self.request(Method::POST, &["gists"])?.json(request))
            .await?;

        if !response.status().is_success() {
            return Err(api_error("Failed to create gist", response).await);
        }

        let gist: GistResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse gist creation response")?;
        Ok(gist)
    }

    /// Update an existing gist
    ///
    /// The body is checked for an API `message` before it is read as a gist;
    /// a non-empty message is returned verbatim as the error.
    pub async fn update_gist(&self, id: &str, request: &GistRequest) -> Result<GistResponse> {
        let response = self
            .send(self.request(Method::PATCH, &["gists", id])?.json(request))
            .await?;

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read gist update response")?;

        let error: ErrorMessage =
            serde_json::from_str(&body).context("Failed to parse gist update response")?;
        if !error.message.is_empty() {
            bail!("{}", error.message);
        }

        let gist: GistResponse =
            serde_json::from_str(&body).context("Failed to parse gist update response")?;
        Ok(gist)
    }

    /// Delete a gist; only `204 No Content` counts as deleted
    pub async fn delete_gist(&self, id: &str) -> Result<DeleteOutcome> {
        let response = self
            .send(self.request(Method::DELETE, &["gists", id])?)
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }

    /// Fetch a single gist with its file contents
    ///
    /// Any status other than `200 OK` fails with `Sorry, {message}`.
    pub async fn get_gist(&self, id: &str) -> Result<GistResponse> {
        let response = self.send(self.request(Method::GET, &["gists", id])?).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = error_message(response).await;
            bail!("Sorry, {}", message);
        }

        let gist: GistResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse gist response")?;
        Ok(gist)
    }
}

/// Read the API error message from a failed response
///
/// Falls back to the status reason when the body carries no message.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let parsed = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorMessage>(&body).ok())
        .map(|error| error.message)
        .unwrap_or_default();

    if parsed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        parsed
    }
}

async fn api_error(context: &str, response: Response) -> anyhow::Error {
    let status = response.status();
    let message = error_message(response).await;
    anyhow!("{} ({}): {}", context, status.as_u16(), message)
}
