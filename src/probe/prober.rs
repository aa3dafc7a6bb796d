use async_trait::async_trait;
use reqwest::{redirect, Client};
use serde::Serialize;

use crate::config::ProbeConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ProbeOutcome {
    Status(u16),
    TlsError,
    ConnectionError,
    Timeout,
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeOutcome::Status(code) => write!(f, "{}", code),
            ProbeOutcome::TlsError => write!(f, "SSL error"),
            ProbeOutcome::ConnectionError => write!(f, "connection error"),
            ProbeOutcome::Timeout => write!(f, "timeout"),
        }
    }
}

#[async_trait]
pub trait ProfileProber: Send + Sync {
    /// Never fails: every problem is folded into a [`ProbeOutcome`].
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Issues a `HEAD` request per profile, without following redirects.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ProfileProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(e) => {
                tracing::debug!("Probe of {} failed: {}", url, e);
                classify_request_error(&e)
            }
        }
    }
}

fn classify_request_error(error: &reqwest::Error) -> ProbeOutcome {
    if error.is_timeout() {
        return ProbeOutcome::Timeout;
    }
    if std::error::Error::source(error).is_some_and(mentions_tls) {
        return ProbeOutcome::TlsError;
    }
    ProbeOutcome::ConnectionError
}

// reqwest has no TLS predicate; walk the source chain for the handshake error.
// The top-level message carries the url, so callers start below it.
fn mentions_tls(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        let message = err.to_string().to_lowercase();
        if ["certificate", "tls", "ssl", "handshake"]
            .iter()
            .any(|needle| message.contains(needle))
        {
            return true;
        }
        current = err.source();
    }
    false
}
