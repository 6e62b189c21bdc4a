// SPDX-License-Identifier: Apache-2.0

//! Security scanning abstraction.
//!
//! The pipeline talks to a [`Scanner`], never to a concrete engine. The
//! shipped [`MockScanner`] returns a canned result; a real static or AI
//! analysis engine implements the same trait and slots in without touching
//! orchestration or rendering.

use anyhow::Result;
use async_trait::async_trait;

pub mod mock;
pub mod types;

pub use mock::MockScanner;
pub use types::{FileFinding, ScanResult, ScannableFile, Severity, SeverityCounts};

/// Analyzes a set of files and produces a scan result.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Scans the given files.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails; an error aborts the pipeline.
    async fn scan(&self, files: &[ScannableFile]) -> Result<ScanResult>;
}
