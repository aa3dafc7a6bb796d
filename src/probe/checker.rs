use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::probe::prober::{ProbeOutcome, ProfileProber};

#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbeSummary {
    pub checked: usize,
    /// 200 and 302.
    pub available: usize,
    /// TLS, connection and timeout failures.
    pub unavailable: usize,
    /// 404.
    pub gone: usize,
    pub other: usize,
}

impl ProbeSummary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        let mut summary = Self {
            checked: results.len(),
            ..Default::default()
        };

        for result in results {
            match result.outcome {
                ProbeOutcome::Status(200) | ProbeOutcome::Status(302) => summary.available += 1,
                ProbeOutcome::Status(404) => summary.gone += 1,
                ProbeOutcome::Status(_) => summary.other += 1,
                ProbeOutcome::TlsError | ProbeOutcome::ConnectionError | ProbeOutcome::Timeout => {
                    summary.unavailable += 1
                }
            }
        }

        summary
    }
}

/// Probes every url, at most `concurrency` at a time. Results keep the input order.
pub async fn check_profiles(
    prober: &dyn ProfileProber,
    urls: &[String],
    concurrency: usize,
) -> Vec<ProbeResult> {
    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} profiles")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let results: Vec<ProbeResult> = stream::iter(urls)
        .map(|url| {
            let pb = pb.clone();
            async move {
                let outcome = prober.probe(url).await;
                pb.inc(1);
                ProbeResult {
                    url: url.clone(),
                    outcome,
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    pb.finish_and_clear();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubProber {
        outcomes: HashMap<String, ProbeOutcome>,
    }

    #[async_trait]
    impl ProfileProber for StubProber {
        async fn probe(&self, url: &str) -> ProbeOutcome {
            self.outcomes
                .get(url)
                .cloned()
                .unwrap_or(ProbeOutcome::ConnectionError)
        }
    }

    #[tokio::test]
    async fn test_check_profiles_keeps_order_and_buckets() {
        let outcomes = HashMap::from([
            ("https://a/users/ok".to_string(), ProbeOutcome::Status(200)),
            ("https://b/users/moved".to_string(), ProbeOutcome::Status(302)),
            ("https://c/users/gone".to_string(), ProbeOutcome::Status(404)),
            ("https://d/users/tls".to_string(), ProbeOutcome::TlsError),
            ("https://e/users/odd".to_string(), ProbeOutcome::Status(410)),
        ]);
        let prober = StubProber { outcomes };
        let urls: Vec<String> = vec![
            "https://a/users/ok",
            "https://b/users/moved",
            "https://c/users/gone",
            "https://d/users/tls",
            "https://x/users/down",
            "https://e/users/odd",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let results = check_profiles(&prober, &urls, 3).await;
        let checked: Vec<_> = results.iter().map(|r| r.url.clone()).collect();
        assert_eq!(checked, urls);

        let summary = ProbeSummary::from_results(&results);
        assert_eq!(
            summary,
            ProbeSummary {
                checked: 6,
                available: 2,
                unavailable: 2,
                gone: 1,
                other: 1,
            }
        );
    }
}
