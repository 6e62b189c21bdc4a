// SPDX-License-Identifier: Apache-2.0

//! Placeholder scanner returning a canned result.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::scan::types::{FileFinding, ScanResult, ScannableFile, SeverityCounts};
use crate::scan::Scanner;

/// Fixed aggregate score reported for every scan.
const SCORE: u32 = 82;

/// Issue text attached to every input file.
const PLACEHOLDER_ISSUE: &str = "Example security issue";

/// Scanner that returns the same result regardless of input.
///
/// Stands in for a real analysis engine: fixed score, fixed severity
/// counts, one synthetic finding per input file.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockScanner;

impl MockScanner {
    /// Creates a new mock scanner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Scanner for MockScanner {
    async fn scan(&self, files: &[ScannableFile]) -> Result<ScanResult> {
        debug!(file_count = files.len(), "Running mock scan");

        Ok(ScanResult {
            score: SCORE,
            counts: SeverityCounts {
                high: 1,
                medium: 2,
                low: 3,
            },
            findings: files
                .iter()
                .map(|file| FileFinding {
                    path: file.path.clone(),
                    issue: PLACEHOLDER_ISSUE.to_string(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> ScannableFile {
        ScannableFile {
            path: path.to_string(),
            content: Some("fn main() {}".to_string()),
        }
    }

    #[tokio::test]
    async fn test_fixed_score_and_counts() {
        let scanner = MockScanner::new();
        let result = scanner.scan(&[file("a.rs")]).await.unwrap();

        assert_eq!(result.score, 82);
        assert_eq!(result.counts.high, 1);
        assert_eq!(result.counts.medium, 2);
        assert_eq!(result.counts.low, 3);
    }

    #[tokio::test]
    async fn test_one_finding_per_input_file() {
        let scanner = MockScanner::new();
        let result = scanner
            .scan(&[file("a.rs"), file("b.rs"), file("c.rs")])
            .await
            .unwrap();

        assert_eq!(result.findings.len(), 3);
        assert_eq!(result.findings[0].path, "a.rs");
        assert_eq!(result.findings[2].path, "c.rs");
        assert!(
            result
                .findings
                .iter()
                .all(|f| f.issue == "Example security issue")
        );
    }

    #[tokio::test]
    async fn test_empty_input_yields_no_findings() {
        let scanner = MockScanner::new();
        let result = scanner.scan(&[]).await.unwrap();
        assert!(result.findings.is_empty());
        assert_eq!(result.score, 82);
    }

    #[tokio::test]
    async fn test_files_without_content_still_flagged() {
        let scanner = MockScanner::new();
        let result = scanner
            .scan(&[ScannableFile {
                path: "binary.bin".to_string(),
                content: None,
            }])
            .await
            .unwrap();
        assert_eq!(result.findings.len(), 1);
    }
}
