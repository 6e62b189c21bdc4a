// SPDX-License-Identifier: Apache-2.0

//! Markdown report rendering.
//!
//! Pure function of the scan result and the changed file list. Section
//! order is fixed; empty lists render as empty blocks under their headers
//! so the report shape never varies.

use crate::github::pulls::ChangedFile;
use crate::scan::ScanResult;

/// Builds the blob URL for a file on the default branch.
fn blob_url(owner: &str, repo: &str, path: &str) -> String {
    format!("https://github.com/{owner}/{repo}/blob/main/{path}")
}

/// Renders the scan report posted as a pull request comment.
#[must_use]
pub fn render_report(
    result: &ScanResult,
    changed_files: &[ChangedFile],
    owner: &str,
    repo: &str,
) -> String {
    let mut md = String::new();

    md.push_str("## Vigil Security Scan Report\n\n");
    md.push_str(&format!("**Security Score:** {} / 100\n\n", result.score));

    md.push_str("### Findings Summary\n\n");
    md.push_str("| Severity | Count |\n");
    md.push_str("|----------|-------|\n");
    md.push_str(&format!("| High | {} |\n", result.counts.high));
    md.push_str(&format!("| Medium | {} |\n", result.counts.medium));
    md.push_str(&format!("| Low | {} |\n\n", result.counts.low));

    md.push_str("### Changed Files\n\n");
    for file in changed_files {
        md.push_str(&format!(
            "- [`{path}`]({url}) ({status})\n",
            path = file.path,
            url = blob_url(owner, repo, &file.path),
            status = file.status,
        ));
    }
    md.push('\n');

    md.push_str("### Flagged Files\n\n");
    for finding in &result.findings {
        md.push_str(&format!(
            "- [`{path}`]({url}) - {issue}\n",
            path = finding.path,
            url = blob_url(owner, repo, &finding.path),
            issue = finding.issue,
        ));
    }
    md.push('\n');

    md.push_str("<details>\n<summary>Why this matters</summary>\n\n");
    md.push_str(
        "These issues may impact the security of your project and the safety of its users.\n",
    );
    md.push_str("</details>\n");

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::pulls::FileStatus;
    use crate::scan::{FileFinding, SeverityCounts};

    fn changed(path: &str, status: FileStatus) -> ChangedFile {
        ChangedFile {
            path: path.to_string(),
            status,
            patch: None,
            sha: "abc".to_string(),
        }
    }

    fn sample_result() -> ScanResult {
        ScanResult {
            score: 82,
            counts: SeverityCounts {
                high: 1,
                medium: 2,
                low: 3,
            },
            findings: vec![FileFinding {
                path: "a.js".to_string(),
                issue: "Example security issue".to_string(),
            }],
        }
    }

    #[test]
    fn test_report_contains_score_and_severity_table() {
        let files = vec![
            changed("a.js", FileStatus::Modified),
            changed("b.js", FileStatus::Added),
        ];
        let report = render_report(&sample_result(), &files, "acme", "widgets");

        assert!(report.contains("82 / 100"));
        assert!(report.contains("| High | 1 |"));
        assert!(report.contains("| Medium | 2 |"));
        assert!(report.contains("| Low | 3 |"));
    }

    #[test]
    fn test_report_links_changed_files_with_status() {
        let files = vec![
            changed("a.js", FileStatus::Modified),
            changed("b.js", FileStatus::Added),
        ];
        let report = render_report(&sample_result(), &files, "acme", "widgets");

        assert!(report.contains("https://github.com/acme/widgets/blob/main/a.js"));
        assert!(report.contains("(modified)"));
        assert!(report.contains("https://github.com/acme/widgets/blob/main/b.js"));
        assert!(report.contains("(added)"));
    }

    #[test]
    fn test_report_lists_flagged_files_with_issue() {
        let files = vec![changed("a.js", FileStatus::Modified)];
        let report = render_report(&sample_result(), &files, "acme", "widgets");

        assert!(report.contains("- [`a.js`](https://github.com/acme/widgets/blob/main/a.js) - Example security issue"));
    }

    #[test]
    fn test_empty_lists_keep_section_headers() {
        let result = ScanResult {
            score: 82,
            counts: SeverityCounts::default(),
            findings: Vec::new(),
        };
        let report = render_report(&result, &[], "acme", "widgets");

        assert!(report.contains("### Changed Files"));
        assert!(report.contains("### Flagged Files"));
        assert!(report.contains("<details>"));
    }

    #[test]
    fn test_section_order_is_fixed() {
        let files = vec![changed("a.js", FileStatus::Modified)];
        let report = render_report(&sample_result(), &files, "acme", "widgets");

        let title = report.find("## Vigil Security Scan Report").unwrap();
        let summary = report.find("### Findings Summary").unwrap();
        let changed_section = report.find("### Changed Files").unwrap();
        let flagged = report.find("### Flagged Files").unwrap();
        let details = report.find("<details>").unwrap();

        assert!(title < summary);
        assert!(summary < changed_section);
        assert!(changed_section < flagged);
        assert!(flagged < details);
    }
}
