use crate::http::{HttpClient, HttpRequest};
use crate::proto::sfu::Edge;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Probes edge servers to pick the closest one before joining.
pub struct LatencyService {
    http_client: Arc<dyn HttpClient>,
}

impl LatencyService {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Issues `tries` sequential GETs against the edge's latency URL. Each
    /// entry is the round trip of one try, or `None` if it failed.
    pub async fn measure_latency(&self, edge: &Edge, tries: usize) -> Vec<Option<Duration>> {
        let url = edge.latency_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            warn!(target: "Client/Latency", "Edge {} has no usable latency URL: {url:?}", edge.name);
            return vec![None; tries];
        }

        let mut results = Vec::with_capacity(tries);
        for _ in 0..tries {
            let started = Instant::now();
            let result = match self.http_client.execute(HttpRequest::get(url)).await {
                Ok(response) if response.is_success() => Some(started.elapsed()),
                Ok(response) => {
                    debug!(target: "Client/Latency", "{} answered {}", edge.name, response.status_code);
                    None
                }
                Err(e) => {
                    debug!(target: "Client/Latency", "{} unreachable: {e}", edge.name);
                    None
                }
            };
            results.push(result);
        }
        results
    }

    /// Measures every edge and returns the name of the one with the lowest
    /// best-case round trip. Edges that never answered are skipped.
    pub async fn fastest_edge(&self, edges: &[Edge], tries: usize) -> Option<String> {
        let mut best: Option<(Duration, &Edge)> = None;
        for edge in edges {
            let fastest = self
                .measure_latency(edge, tries)
                .await
                .into_iter()
                .flatten()
                .min();
            if let Some(latency) = fastest {
                if best.is_none_or(|(current, _)| latency < current) {
                    best = Some((latency, edge));
                }
            }
        }
        best.map(|(_, edge)| edge.name.clone())
    }
}
