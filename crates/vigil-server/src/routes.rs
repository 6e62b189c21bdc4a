// SPDX-License-Identifier: Apache-2.0

//! HTTP routes for the webhook server.
//!
//! `POST /webhooks/github` receives GitHub deliveries; only `pull_request`
//! events reach the handler, everything else is acknowledged and dropped.
//! `GET /healthz` is a liveness probe.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use tracing::{debug, error, info, warn};

use vigil_core::{ClientProvider, HandlerOutcome, PullRequestEvent, Scanner, handle_pull_request};

/// Shared state handed to route handlers.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn ClientProvider>,
    scanner: Arc<dyn Scanner>,
}

impl AppState {
    /// Creates the shared state from a credential provider and a scanner.
    #[must_use]
    pub fn new(provider: Arc<dyn ClientProvider>, scanner: Arc<dyn Scanner>) -> Self {
        Self { provider, scanner }
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhooks/github", post(receive_webhook))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Liveness probe.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Receives a GitHub webhook delivery.
///
/// The delivery's event type comes from the `X-GitHub-Event` header.
/// Non-`pull_request` deliveries (including `ping`) are acknowledged with
/// 200 and ignored; a `pull_request` delivery that does not parse is a
/// 400; a handler failure is a 500.
async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let event_type = headers
        .get("X-GitHub-Event")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if event_type != "pull_request" {
        debug!(event_type, "Ignoring delivery");
        return StatusCode::OK;
    }

    let event: PullRequestEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(err) => {
            warn!(error = %err, "Malformed pull_request payload");
            return StatusCode::BAD_REQUEST;
        }
    };

    match handle_pull_request(state.provider.as_ref(), state.scanner.as_ref(), &event).await {
        Ok(HandlerOutcome::Commented { comment_url }) => {
            info!(url = %comment_url, "Webhook processed");
            StatusCode::OK
        }
        Ok(HandlerOutcome::Skipped(reason)) => {
            debug!(%reason, "Webhook skipped");
            StatusCode::OK
        }
        Err(err) => {
            error!(error = %err, "Webhook processing failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
