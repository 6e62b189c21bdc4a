// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Vigil Core
//!
//! Core library for Vigil - a GitHub App that scans pull request changes
//! and posts a security report comment.
//!
//! This crate provides the components of the scan pipeline:
//! - Webhook event model for `pull_request` deliveries
//! - Credential resolution behind the [`ClientProvider`] trait
//! - Paginated changed-file listing and per-file content fetching
//! - A replaceable [`Scanner`] abstraction with a placeholder engine
//! - Markdown report rendering and comment posting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vigil_core::{MockScanner, PullRequestEvent, TokenClientProvider, handle_pull_request};
//! use secrecy::SecretString;
//!
//! # async fn example(event: PullRequestEvent) -> anyhow::Result<()> {
//! let provider = TokenClientProvider::new(SecretString::from("ghs_token".to_string()));
//! let scanner = MockScanner::new();
//!
//! let outcome = handle_pull_request(&provider, &scanner, &event).await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading
//! - [`error`] - Error types
//! - [`event`] - Webhook payload model
//! - [`github`] - GitHub API (auth, files, contents, comments)
//! - [`handler`] - Event validation and pipeline orchestration
//! - [`report`] - Markdown report rendering
//! - [`scan`] - Scanner abstraction and placeholder engine

// ============================================================================
// Error Handling
// ============================================================================

pub use error::VigilError;

/// Convenience Result type for Vigil operations.
///
/// This is equivalent to `std::result::Result<T, VigilError>`.
pub type Result<T> = std::result::Result<T, VigilError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, ServerConfig, load_config};

// ============================================================================
// Webhook Events
// ============================================================================

pub use event::{Installation, PullRequest, PullRequestAction, PullRequestEvent, PullRequestState};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{ClientProvider, TokenClientProvider};
pub use github::content::fetch_file_content;
pub use github::issues::post_comment;
pub use github::pulls::{ChangedFile, FileStatus, list_changed_files};

// ============================================================================
// Scanning
// ============================================================================

pub use scan::{
    FileFinding, MockScanner, ScanResult, ScannableFile, Scanner, Severity, SeverityCounts,
};

// ============================================================================
// Reporting
// ============================================================================

pub use report::render_report;

// ============================================================================
// Event Handling
// ============================================================================

pub use handler::{HandlerOutcome, SkipReason, handle_pull_request};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod event;
pub mod github;
pub mod handler;
pub mod report;
pub mod scan;
