use anyhow::Result;
use async_trait::async_trait;
use quiz_submit::{
    AlertSink, Contract, FormData, InMemoryKeyValueStore, Navigator, Outcome, ReqwestPoster,
    SubmissionHandler, SubmitEvent, load_stored_result,
};
use std::sync::Arc;
use tracing::{Level, info};

/// Configuration for the quiz client
#[derive(Debug, Clone)]
struct ClientConfig {
    server_url: String,
}

impl ClientConfig {
    fn from_env() -> Self {
        // Flask dev-server default port.
        let server_url = std::env::var("QUIZ_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self { server_url }
    }
}

/// Headless navigator: reports where the browser would go.
struct LoggingNavigator;

#[async_trait]
impl Navigator for LoggingNavigator {
    async fn navigate(&self, target: &str) -> quiz_submit::Result<()> {
        info!(target, "navigating");
        Ok(())
    }
}

/// Alerts go to stderr, where a terminal user will actually see them.
struct StderrAlerts;

#[async_trait]
impl AlertSink for StderrAlerts {
    async fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Answers come from `name=value` command-line pairs; with no arguments a
/// default `q1..q4` answer set is submitted.
fn form_from_args() -> FormData {
    let pairs: Vec<(String, String)> = std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect();

    if pairs.is_empty() {
        FormData::new([("q1", "1"), ("q2", "2"), ("q3", "3"), ("q4", "4")])
    } else {
        FormData::new(pairs)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ClientConfig::from_env();
    info!(server_url = %config.server_url, "submitting quiz answers");

    let store = Arc::new(InMemoryKeyValueStore::new());
    let handler = SubmissionHandler::new(
        Contract::default(),
        Arc::new(ReqwestPoster::new(config.server_url)),
        Arc::new(LoggingNavigator),
        store.clone(),
        Arc::new(StderrAlerts),
    );

    let event = SubmitEvent::new(form_from_args());
    let outcome = handler.handle_submit(&event).await?;

    match outcome {
        Outcome::Redirected(target) => {
            println!("redirected to {target}");
        }
        Outcome::ResultStored => {
            if let Some(result) = load_stored_result(store.as_ref()).await? {
                println!("recommendations: {}", serde_json::to_string_pretty(&result)?);
            }
        }
        Outcome::ErrorAlerted(err) => {
            info!(error = %err, "submission attempt failed");
        }
    }

    Ok(())
}
