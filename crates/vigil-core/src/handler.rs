// SPDX-License-Identifier: Apache-2.0

//! Pull request event handling.
//!
//! Validates an incoming `pull_request` event, then drives the scan
//! pipeline: list changed files, fetch contents at the head commit, scan,
//! render, and post the report comment. Validation skips are not errors;
//! they are surfaced as a typed [`HandlerOutcome`] so callers can tell a
//! clean skip from a posted comment.

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::event::{PullRequestEvent, PullRequestState};
use crate::github::auth::ClientProvider;
use crate::github::content::fetch_file_content;
use crate::github::issues::post_comment;
use crate::github::pulls::list_changed_files;
use crate::report::render_report;
use crate::scan::{ScannableFile, Scanner};

/// Why an event was skipped without posting a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The action does not trigger a scan.
    UnsupportedAction,
    /// The pull request is missing or not open.
    PullRequestNotOpen,
    /// The event carries no installation id.
    MissingInstallation,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnsupportedAction => write!(f, "unsupported action"),
            SkipReason::PullRequestNotOpen => write!(f, "pull request not open"),
            SkipReason::MissingInstallation => write!(f, "no installation"),
        }
    }
}

/// Outcome of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// Event was valid and a report comment was posted.
    Commented {
        /// URL of the posted comment.
        comment_url: String,
    },
    /// Event did not qualify for a scan; nothing was posted.
    Skipped(SkipReason),
}

/// Handles one `pull_request` webhook event.
///
/// Validation short-circuits: an unsupported action, a closed or missing
/// pull request, or a missing installation id ends the invocation cleanly
/// with a [`HandlerOutcome::Skipped`]. Past validation, any pipeline error
/// aborts the invocation; no partial report is posted.
///
/// # Errors
///
/// Returns an error if credential resolution, file listing, scanning, or
/// comment posting fails. Individual file content fetches never fail the
/// pipeline.
#[instrument(skip(provider, scanner, event), fields(action = ?event.action))]
pub async fn handle_pull_request(
    provider: &dyn ClientProvider,
    scanner: &dyn Scanner,
    event: &PullRequestEvent,
) -> Result<HandlerOutcome> {
    if !event.action.triggers_scan() {
        info!(action = ?event.action, "Skipping pull request action");
        return Ok(HandlerOutcome::Skipped(SkipReason::UnsupportedAction));
    }

    let pr = match &event.pull_request {
        Some(pr) if pr.state == PullRequestState::Open => pr,
        _ => {
            info!("Pull request is closed, skipping");
            return Ok(HandlerOutcome::Skipped(SkipReason::PullRequestNotOpen));
        }
    };

    let Some(installation) = &event.installation else {
        info!("No installation found, skipping");
        return Ok(HandlerOutcome::Skipped(SkipReason::MissingInstallation));
    };

    info!(action = ?event.action, "Processing pull request");

    let owner = &pr.base.repo.owner.login;
    let repo = &pr.base.repo.name;
    let number = pr.number;
    let head_sha = &pr.head.sha;

    let client = provider.client_for(installation.id).await?;

    let changed_files = list_changed_files(&client, owner, repo, number).await?;
    debug!(
        files = ?changed_files.iter().map(|f| f.path.as_str()).collect::<Vec<_>>(),
        "Changed files"
    );

    // Removed files have no content at the head commit; everything else is
    // fetched one at a time, in list order.
    let mut files_for_scan = Vec::new();
    for file in changed_files.iter().filter(|f| !f.status.is_removed()) {
        let content = fetch_file_content(&client, owner, repo, &file.path, head_sha).await;
        files_for_scan.push(ScannableFile {
            path: file.path.clone(),
            content,
        });
    }

    let result = scanner.scan(&files_for_scan).await?;

    let body = render_report(&result, &changed_files, owner, repo);
    let comment_url = post_comment(&client, owner, repo, number, &body).await?;

    info!(url = %comment_url, "Scan report posted");

    Ok(HandlerOutcome::Commented { comment_url })
}
