// SPDX-License-Identifier: Apache-2.0

//! Scan input and result types.

use serde::{Deserialize, Serialize};

/// Severity level of a scan finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// High severity issue that should be addressed soon.
    High,
    /// Medium severity issue.
    Medium,
    /// Low severity issue or informational finding.
    Low,
}

/// Finding counts bucketed by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Number of high severity findings.
    pub high: u32,
    /// Number of medium severity findings.
    pub medium: u32,
    /// Number of low severity findings.
    pub low: u32,
}

impl SeverityCounts {
    /// Returns the count for one severity level.
    #[must_use]
    pub fn get(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// A flagged file with its issue description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFinding {
    /// Path of the flagged file.
    pub path: String,
    /// Human-readable description of the issue.
    pub issue: String,
}

/// Result of scanning a set of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Aggregate score out of 100.
    pub score: u32,
    /// Finding counts by severity.
    pub counts: SeverityCounts,
    /// Flagged files in scan order.
    pub findings: Vec<FileFinding>,
}

/// A file handed to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannableFile {
    /// Path relative to the repository root.
    pub path: String,
    /// Full decoded text content, `None` when the fetch failed.
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&Severity::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_severity_counts_get() {
        let counts = SeverityCounts {
            high: 1,
            medium: 2,
            low: 3,
        };
        assert_eq!(counts.get(Severity::High), 1);
        assert_eq!(counts.get(Severity::Medium), 2);
        assert_eq!(counts.get(Severity::Low), 3);
    }

    #[test]
    fn test_scan_result_round_trip() {
        let result = ScanResult {
            score: 82,
            counts: SeverityCounts {
                high: 1,
                medium: 2,
                low: 3,
            },
            findings: vec![FileFinding {
                path: "src/config.rs".to_string(),
                issue: "Hardcoded API key detected".to_string(),
            }],
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
