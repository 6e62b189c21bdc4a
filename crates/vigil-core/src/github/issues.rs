// SPDX-License-Identifier: Apache-2.0

//! Issue comment operations.
//!
//! Pull request comments go through the issues API; the pull request
//! number doubles as the issue number.

use anyhow::{Context, Result};
use octocrab::Octocrab;
use tracing::{debug, instrument};

/// Posts a comment to a pull request.
///
/// # Returns
///
/// The URL of the created comment.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip(client, body), fields(owner = %owner, repo = %repo, number = number))]
pub async fn post_comment(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    body: &str,
) -> Result<String> {
    debug!("Posting scan report comment");

    let comment = client
        .issues(owner, repo)
        .create_comment(number, body)
        .await
        .with_context(|| format!("Failed to post comment to PR #{number}"))?;

    let comment_url = comment.html_url.to_string();

    debug!(url = %comment_url, "Comment posted successfully");

    Ok(comment_url)
}
