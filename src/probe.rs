//! HTTP reachability probe

use reqwest::{Client, StatusCode, Url};
use tokio::time::{Duration, Instant};

/// Outcome of a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// Response arrived before the deadline with status exactly 200
    pub reachable: bool,
    /// Time from dispatch until the outcome was known
    pub elapsed: Duration,
}

impl ProbeResult {
    fn not_sent() -> Self {
        Self {
            reachable: false,
            elapsed: Duration::ZERO,
        }
    }
}

/// Build the HTTP client used for probing
pub fn client(timeout: Duration) -> anyhow::Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Probe `url` with a fresh client. Never fails; every error means unreachable.
pub async fn probe(url: &str, timeout: Duration) -> ProbeResult {
    match client(timeout) {
        Ok(c) => probe_with(&c, url, timeout).await,
        Err(e) => {
            tracing::debug!("Failed to build HTTP client: {}", e);
            ProbeResult::not_sent()
        }
    }
}

/// Probe `url` using an existing client, hard-cancelled at `timeout`
pub async fn probe_with(client: &Client, url: &str, timeout: Duration) -> ProbeResult {
    let target = match Url::parse(url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => u,
        Ok(u) => {
            tracing::debug!("Unsupported scheme {:?} in {}", u.scheme(), url);
            return ProbeResult::not_sent();
        }
        Err(e) => {
            tracing::debug!("Malformed URL {:?}: {}", url, e);
            return ProbeResult::not_sent();
        }
    };

    tracing::debug!("Requesting {} (timeout {:?})", target, timeout);
    let request = client.get(target).timeout(timeout);

    let start = Instant::now();
    let outcome = tokio::time::timeout(timeout, request.send()).await;
    let elapsed = start.elapsed();

    // Response (and body) is dropped at the end of its arm, releasing the connection.
    let reachable = match outcome {
        Ok(Ok(response)) => {
            let status = response.status();
            tracing::debug!("{} answered {} in {:?}", url, status, elapsed);
            status == StatusCode::OK
        }
        Ok(Err(e)) => {
            tracing::debug!("{} failed after {:?}: {}", url, elapsed, e);
            false
        }
        Err(_) => {
            tracing::debug!("{} timed out after {:?}", url, elapsed);
            false
        }
    };

    ProbeResult { reachable, elapsed }
}
