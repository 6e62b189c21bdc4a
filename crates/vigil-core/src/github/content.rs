// SPDX-License-Identifier: Apache-2.0

//! File content retrieval at a specific commit.
//!
//! The contents endpoint returns Base64-encoded text for regular files.
//! Directories, symlinks, and submodules come back without a content
//! field. Fetch failures here are expected (binary files, permissions) and
//! are absorbed into `None` rather than aborting the scan.

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use octocrab::Octocrab;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Characters escaped inside a path segment of an API route.
///
/// Slashes stay literal so the path keeps its directory structure.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Wire format of a contents response for a regular file.
#[derive(Debug, Deserialize)]
struct ContentRecord {
    /// Base64-encoded file content; absent for directories and symlinks.
    content: Option<String>,
}

/// Fetches the decoded text content of a file at a commit reference.
///
/// Returns `None` when the file cannot be fetched or decoded for any
/// reason. This is the one place in the pipeline where failures are
/// absorbed: a single unreadable file should not abort the scan.
#[instrument(skip(client), fields(owner = %owner, repo = %repo, path = %path))]
pub async fn fetch_file_content(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    path: &str,
    reference: &str,
) -> Option<String> {
    let encoded_path = utf8_percent_encode(path, PATH_SEGMENT);
    let route = format!("/repos/{owner}/{repo}/contents/{encoded_path}?ref={reference}");

    let record: ContentRecord = match client.get(&route, None::<&()>).await {
        Ok(record) => record,
        Err(err) => {
            warn!(error = %err, "Could not fetch content");
            return None;
        }
    };

    let Some(encoded) = record.content else {
        debug!("Response has no content field");
        return None;
    };

    match decode_content(&encoded) {
        Ok(text) => {
            debug!(bytes = text.len(), "Fetched file content");
            Some(text)
        }
        Err(err) => {
            warn!(error = %err, "Could not decode content");
            None
        }
    }
}

/// Decodes the Base64 payload of a contents response.
///
/// GitHub wraps the Base64 text with newlines; strip all ASCII whitespace
/// before decoding.
fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .context("Content field is not valid Base64")?;
    String::from_utf8(bytes).context("Decoded content is not valid UTF-8")
}
