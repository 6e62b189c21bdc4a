// SPDX-License-Identifier: Apache-2.0

//! Error types for Vigil.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Pipeline plumbing uses `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Vigil operations.
#[derive(Error, Debug)]
pub enum VigilError {
    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// No GitHub credentials were available to build a client.
    #[error("Authentication required - set github.token in vigil.toml or the GITHUB_TOKEN environment variable")]
    NotAuthenticated,
}

impl From<octocrab::Error> for VigilError {
    fn from(err: octocrab::Error) -> Self {
        VigilError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for VigilError {
    fn from(err: config::ConfigError) -> Self {
        VigilError::Config {
            message: err.to_string(),
        }
    }
}
