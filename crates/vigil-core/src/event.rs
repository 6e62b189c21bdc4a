// SPDX-License-Identifier: Apache-2.0

//! Webhook payload model for `pull_request` events.
//!
//! Mirrors the subset of the GitHub webhook JSON that the handler reads:
//! the action, the pull request state and coordinates, and the installation
//! that scopes API access. Unknown actions and states deserialize into
//! catch-all variants so new webhook vocabulary never fails parsing.

use serde::Deserialize;

/// Action field of a `pull_request` webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    /// Pull request was opened.
    Opened,
    /// Pull request was closed.
    Closed,
    /// Pull request was reopened.
    Reopened,
    /// New commits were pushed to the pull request branch.
    Synchronize,
    /// Title or body was edited.
    Edited,
    /// Any action this service does not react to.
    #[serde(other)]
    Other,
}

impl PullRequestAction {
    /// Whether this action should trigger a scan.
    ///
    /// Only opened, reopened, and synchronize deliveries carry new code to
    /// look at.
    #[must_use]
    pub fn triggers_scan(self) -> bool {
        matches!(
            self,
            PullRequestAction::Opened | PullRequestAction::Reopened | PullRequestAction::Synchronize
        )
    }
}

/// State of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    /// Pull request is open.
    Open,
    /// Pull request is closed (merged or not).
    Closed,
    /// Any other state value.
    #[serde(other)]
    Other,
}

/// The GitHub App installation that delivered the event.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Installation {
    /// Installation identifier used to scope API credentials.
    pub id: u64,
}

/// Repository owner.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// Owner login (user or organization name).
    pub login: String,
}

/// Repository coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,
    /// Repository owner.
    pub owner: Owner,
}

/// Head of the pull request branch.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    /// Commit SHA of the latest commit on the source branch.
    pub sha: String,
}

/// Base of the pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseRef {
    /// Repository the pull request targets.
    pub repo: Repository,
}

/// Pull request details carried by the event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// Current state.
    pub state: PullRequestState,
    /// Pull request number within the repository.
    pub number: u64,
    /// Head commit reference.
    pub head: HeadRef,
    /// Base repository coordinates.
    pub base: BaseRef,
}

/// A `pull_request` webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// What happened to the pull request.
    pub action: PullRequestAction,
    /// The pull request, absent on some delivery shapes.
    pub pull_request: Option<PullRequest>,
    /// The installation, absent when the app is not installed.
    pub installation: Option<Installation>,
}
