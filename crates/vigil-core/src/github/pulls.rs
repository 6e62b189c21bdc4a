// SPDX-License-Identifier: Apache-2.0

//! Pull request file listing via Octocrab.
//!
//! Walks the paginated list-files endpoint to return the complete set of
//! files touched by a pull request, in API return order.

use anyhow::{Context, Result};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Records per page requested from the list-files endpoint.
///
/// Also the termination signal: a page with fewer records is the last one.
const PAGE_SIZE: usize = 100;

/// Status of a file within a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// File was added.
    Added,
    /// File was modified in place.
    Modified,
    /// File was removed.
    Removed,
    /// File was renamed.
    Renamed,
    /// File was copied from another path.
    Copied,
    /// File mode or type changed.
    Changed,
    /// File appears in the diff but its contents are unchanged.
    Unchanged,
}

impl FileStatus {
    /// Whether the file no longer exists at the head commit.
    #[must_use]
    pub fn is_removed(self) -> bool {
        matches!(self, FileStatus::Removed)
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Removed => "removed",
            FileStatus::Renamed => "renamed",
            FileStatus::Copied => "copied",
            FileStatus::Changed => "changed",
            FileStatus::Unchanged => "unchanged",
        };
        write!(f, "{s}")
    }
}

/// A file touched by a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path relative to the repository root.
    pub path: String,
    /// How the pull request touches the file.
    pub status: FileStatus,
    /// Unified diff for the file, absent for binary or oversized files.
    pub patch: Option<String>,
    /// SHA of the file's blob object.
    pub sha: String,
}

/// Wire format of a list-files record.
#[derive(Debug, Deserialize)]
struct PullRequestFileRecord {
    filename: String,
    status: FileStatus,
    patch: Option<String>,
    sha: String,
}

impl From<PullRequestFileRecord> for ChangedFile {
    fn from(record: PullRequestFileRecord) -> Self {
        Self {
            path: record.filename,
            status: record.status,
            patch: record.patch,
            sha: record.sha,
        }
    }
}

/// Fetches the complete list of files changed by a pull request.
///
/// Requests pages of [`PAGE_SIZE`] records until a short page signals the
/// end. The returned order is the API return order across pages.
///
/// # Errors
///
/// Returns an error if any page request fails; partial results are
/// discarded.
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number = number))]
pub async fn list_changed_files(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<Vec<ChangedFile>> {
    debug!("Fetching changed files");

    let mut files = Vec::new();
    let mut page: u32 = 1;

    loop {
        let route =
            format!("/repos/{owner}/{repo}/pulls/{number}/files?per_page={PAGE_SIZE}&page={page}");
        let records: Vec<PullRequestFileRecord> = client
            .get(&route, None::<&()>)
            .await
            .with_context(|| format!("Failed to fetch files for PR #{number} (page {page})"))?;

        let page_len = records.len();
        files.extend(records.into_iter().map(ChangedFile::from));

        if page_len < PAGE_SIZE {
            break;
        }
        page += 1;
    }

    debug!(count = files.len(), "Changed files fetched");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_status_deserializes_from_api_values() {
        let status: FileStatus = serde_json::from_str("\"added\"").unwrap();
        assert_eq!(status, FileStatus::Added);
        let status: FileStatus = serde_json::from_str("\"removed\"").unwrap();
        assert_eq!(status, FileStatus::Removed);
    }

    #[test]
    fn test_file_status_display() {
        assert_eq!(FileStatus::Modified.to_string(), "modified");
        assert_eq!(FileStatus::Removed.to_string(), "removed");
    }

    #[test]
    fn test_is_removed() {
        assert!(FileStatus::Removed.is_removed());
        assert!(!FileStatus::Added.is_removed());
        assert!(!FileStatus::Renamed.is_removed());
    }

    #[test]
    fn test_record_maps_filename_to_path() {
        let record: PullRequestFileRecord = serde_json::from_str(
            r#"{
                "filename": "src/lib.rs",
                "status": "modified",
                "patch": "@@ -1 +1 @@",
                "sha": "def456"
            }"#,
        )
        .unwrap();

        let file = ChangedFile::from(record);
        assert_eq!(file.path, "src/lib.rs");
        assert_eq!(file.status, FileStatus::Modified);
        assert_eq!(file.patch.as_deref(), Some("@@ -1 +1 @@"));
        assert_eq!(file.sha, "def456");
    }

    #[test]
    fn test_record_without_patch() {
        let record: PullRequestFileRecord = serde_json::from_str(
            r#"{ "filename": "logo.png", "status": "added", "sha": "aaa" }"#,
        )
        .unwrap();
        assert!(record.patch.is_none());
    }
}
