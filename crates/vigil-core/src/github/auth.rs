// SPDX-License-Identifier: Apache-2.0

//! Credential resolution for webhook-driven API access.
//!
//! Every webhook delivery names the installation it belongs to; the
//! [`ClientProvider`] trait turns that installation id into a ready-to-use
//! Octocrab client. Token minting, refresh, and caching live behind the
//! trait - callers never see credentials, only clients.

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::VigilError;

/// Provides authenticated GitHub clients scoped to an installation.
///
/// Implementations own the credential lifecycle. The production
/// implementation resolves a configured token; deployments with full
/// GitHub App credentials can substitute one that mints installation
/// tokens without touching the pipeline.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// Returns an authenticated client for the given installation.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials are available or the client
    /// cannot be built.
    async fn client_for(&self, installation_id: u64) -> Result<Octocrab, VigilError>;
}

/// Client provider backed by a single configured token.
pub struct TokenClientProvider {
    token: SecretString,
}

impl TokenClientProvider {
    /// Creates a provider from a token.
    #[must_use]
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Creates a provider from the `GITHUB_TOKEN` environment variable.
    ///
    /// Returns `None` if the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())?;
        debug!("Using token from GITHUB_TOKEN environment variable");
        Some(Self::new(SecretString::from(token)))
    }
}

#[async_trait]
impl ClientProvider for TokenClientProvider {
    async fn client_for(&self, installation_id: u64) -> Result<Octocrab, VigilError> {
        debug!(installation_id, "Creating GitHub client");

        let client = Octocrab::builder()
            .personal_token(self.token.expose_secret().to_string())
            .build()?;

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_provider_builds_client() {
        let provider = TokenClientProvider::new(SecretString::from("test-token".to_string()));
        assert!(provider.client_for(123).await.is_ok());
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_from_env_returns_none_when_unset() {
        // SAFETY: Test runs single-threaded; no other threads access these vars.
        unsafe {
            std::env::remove_var("GITHUB_TOKEN");
        }
        assert!(TokenClientProvider::from_env().is_none());
    }
}
