use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Create a GitHub client.
///
/// With a personal access token the client is authenticated (higher search
/// quota); without one it makes anonymous requests.
pub fn create_client(token: Option<&str>) -> Result<Octocrab> {
    let builder = Octocrab::builder();
    let builder = match token {
        Some(token) => builder.personal_token(token.to_string()),
        None => builder,
    };

    builder.build().context("Failed to create GitHub client")
}
