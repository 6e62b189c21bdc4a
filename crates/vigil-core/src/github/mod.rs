// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides credential resolution and the API operations the scan pipeline
//! drives: listing pull request files, fetching file contents, and posting
//! the report comment.

pub mod auth;
pub mod content;
pub mod issues;
pub mod pulls;
