//! SubmissionHandler – turns one user-initiated submit event into one JSON
//! POST and reacts to the outcome: redirect, store-and-navigate, or alert.
//!
//! The handler owns no mutable state. Each `handle_submit` call is an
//! independent cycle (`Idle → Submitting → terminal`); concurrent calls on
//! the same handler produce independent, unordered requests — there is no
//! mutual exclusion, no in-flight cancellation, and no de-duplication, so
//! overlapping responses may land in any order. Last storage writer wins.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::capabilities::{AlertSink, HttpPoster, KeyValueStore, Navigator};
use crate::contract::Contract;
use crate::error::{Result, SubmitError};
use crate::form::SubmitEvent;

/// Path answers are posted to.
pub const PREDICT_PATH: &str = "/predict";
/// Fallback navigation target when the dynamic contract stores a result.
pub const RESULT_PATH: &str = "/result";
/// Storage key the result page reads the latest response from.
pub const RECOMMENDATIONS_KEY: &str = "recommendations";

/// Shown when a fixed-contract response carries no `redirect`.
pub const UNEXPECTED_FORMAT_ALERT: &str = "Unexpected response format.";
/// Shown when the request or response parse fails outright.
pub const FETCH_FAILED_ALERT: &str =
    "⚠️ Something went wrong while fetching the recommendation.";

/// Terminal state of one submission attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The server supplied a redirect and the navigator was pointed at it.
    Redirected(String),
    /// Dynamic contract: the response was stored under
    /// [`RECOMMENDATIONS_KEY`] and navigation went to [`RESULT_PATH`].
    ResultStored,
    /// The user was alerted; no navigation happened. The form stays usable
    /// for another attempt.
    ErrorAlerted(SubmitError),
}

/// The form submission handler, with every ambient browser dependency made an
/// explicit capability.
pub struct SubmissionHandler {
    contract: Contract,
    http: Arc<dyn HttpPoster>,
    navigator: Arc<dyn Navigator>,
    store: Arc<dyn KeyValueStore>,
    alerts: Arc<dyn AlertSink>,
}

impl SubmissionHandler {
    pub fn new(
        contract: Contract,
        http: Arc<dyn HttpPoster>,
        navigator: Arc<dyn Navigator>,
        store: Arc<dyn KeyValueStore>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            contract,
            http,
            navigator,
            store,
            alerts,
        }
    }

    /// Handle one submit event: cancel the default form action, post the
    /// extracted answers to [`PREDICT_PATH`], and apply the response.
    ///
    /// Transport and parse failures are terminal for this attempt — logged,
    /// alerted, never retried — and come back as [`Outcome::ErrorAlerted`],
    /// not `Err`. `Err` is reserved for a capability itself failing
    /// (storage write, navigation).
    pub async fn handle_submit(&self, event: &SubmitEvent) -> Result<Outcome> {
        event.prevent_default();

        let payload = self.contract.build_payload(event.form());
        debug!(form_id = %event.form().id(), body = %payload, "posting answers");

        match self.http.post_json(PREDICT_PATH, payload).await {
            Ok(body) => self.apply_response(body).await,
            Err(err) => {
                error!(error = %err, "prediction request failed");
                self.alerts.alert(FETCH_FAILED_ALERT).await;
                Ok(Outcome::ErrorAlerted(err))
            }
        }
    }

    async fn apply_response(&self, body: Value) -> Result<Outcome> {
        if let Some(target) = body.get("redirect").and_then(Value::as_str) {
            debug!(target, "server requested redirect");
            self.navigator.navigate(target).await?;
            return Ok(Outcome::Redirected(target.to_string()));
        }

        match &self.contract {
            Contract::Fixed { .. } => {
                warn!("response carried no redirect field");
                self.alerts.alert(UNEXPECTED_FORMAT_ALERT).await;
                Ok(Outcome::ErrorAlerted(SubmitError::UnexpectedFormat))
            }
            Contract::Dynamic => {
                let serialized = serde_json::to_string(&body)?;
                self.store.set(RECOMMENDATIONS_KEY, serialized).await?;
                self.navigator.navigate(RESULT_PATH).await?;
                Ok(Outcome::ResultStored)
            }
        }
    }
}

/// Retrieval half of the storage contract: what the result page reads back
/// after a dynamic-contract submission navigated to [`RESULT_PATH`].
pub async fn load_stored_result(store: &dyn KeyValueStore) -> Result<Option<Value>> {
    match store.get(RECOMMENDATIONS_KEY).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
