//! Backend liveness and API description.

use serde_json::Value;
use thiserror::Error;

use super::transport::{HttpTransport, RawResponse, TransportError};
use crate::config::{ApiConfig, Endpoint};
use crate::types::{ApiInfo, AppError, AppResult};

/// Why the backend was considered unhealthy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HealthError {
    /// Answered with a non-2xx status.
    #[error("API answered with status {0}")]
    Status(u16),

    /// No answer at all.
    #[error("API unreachable: {0}")]
    Transport(#[from] TransportError),

    /// 2xx but the body is not JSON.
    #[error("API health body is not valid JSON: {0}")]
    InvalidBody(String),
}

impl HealthError {
    /// Stable reason code for callers that branch on the cause.
    pub fn reason_code(&self) -> &'static str {
        match self {
            HealthError::Status(_) => "http_status",
            HealthError::Transport(TransportError::Timeout(_)) => "timeout",
            HealthError::Transport(TransportError::Network(_)) => "network",
            HealthError::InvalidBody(_) => "invalid_body",
        }
    }
}

/// Outcome of a health probe.
#[derive(Clone, Debug, PartialEq)]
pub enum HealthStatus {
    /// Parsed health body, kept for diagnostics only.
    Healthy(Value),
    Unhealthy(HealthError),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy(_))
    }
}

/// Probe the `HEALTH` endpoint once.
///
/// Never fails: every problem becomes [`HealthStatus::Unhealthy`] and is
/// logged. No retry.
pub async fn check_api_health<T: HttpTransport>(transport: &T, config: &ApiConfig) -> HealthStatus {
    let url = config.endpoint(Endpoint::Health);
    let result = transport
        .get(url, &[("Content-Type", "application/json")])
        .await;

    let status = match result {
        Ok(response) => interpret_health(&response),
        Err(e) => HealthStatus::Unhealthy(HealthError::Transport(e)),
    };

    match &status {
        HealthStatus::Healthy(body) => log::info!("✅ API connection OK: {}", body),
        HealthStatus::Unhealthy(HealthError::Status(code)) => {
            log::error!("❌ API connection failed: {}", code)
        }
        HealthStatus::Unhealthy(e) => log::error!("❌ Cannot reach API: {}", e),
    }

    status
}

/// Boolean form of [`check_api_health`].
pub async fn is_api_healthy<T: HttpTransport>(transport: &T, config: &ApiConfig) -> bool {
    check_api_health(transport, config).await.is_healthy()
}

fn interpret_health(response: &RawResponse) -> HealthStatus {
    if !response.is_success() {
        return HealthStatus::Unhealthy(HealthError::Status(response.status));
    }
    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => HealthStatus::Healthy(body),
        Err(e) => HealthStatus::Unhealthy(HealthError::InvalidBody(e.to_string())),
    }
}

/// Fetch the API description from the `ROOT` endpoint.
pub async fn fetch_api_info<T: HttpTransport>(transport: &T, config: &ApiConfig) -> AppResult<ApiInfo> {
    let response = transport.get(config.endpoint(Endpoint::Root), &[]).await?;

    if !response.is_success() {
        return Err(AppError::Server {
            status: response.status,
            message: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use futures::executor::block_on;

    use super::*;
    use crate::config::BackendUrls;

    /// Replays a canned answer and records what was requested.
    struct FakeTransport {
        answer: Result<RawResponse, TransportError>,
        requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FakeTransport {
        fn answering(answer: Result<RawResponse, TransportError>) -> Self {
            Self {
                answer,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for FakeTransport {
        async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, TransportError> {
            let headers = headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.requests.borrow_mut().push((url.to_string(), headers));
            self.answer.clone()
        }
    }

    fn config() -> ApiConfig {
        ApiConfig::resolve("localhost", &BackendUrls::default())
    }

    #[test]
    fn test_healthy_on_200() {
        let transport = FakeTransport::answering(Ok(RawResponse::new(200, r#"{"status":"ok"}"#)));

        let status = block_on(check_api_health(&transport, &config()));

        assert!(status.is_healthy());
        assert_eq!(status, HealthStatus::Healthy(serde_json::json!({"status": "ok"})));
    }

    #[test]
    fn test_probe_targets_health_endpoint_with_json_header() {
        let transport = FakeTransport::answering(Ok(RawResponse::new(200, r#"{"status":"healthy"}"#)));

        assert!(block_on(is_api_healthy(&transport, &config())));

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://localhost:8000/health");
        assert_eq!(
            requests[0].1,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_unhealthy_on_error_status() {
        let transport = FakeTransport::answering(Ok(RawResponse::new(503, "down")));

        let status = block_on(check_api_health(&transport, &config()));

        assert_eq!(status, HealthStatus::Unhealthy(HealthError::Status(503)));
        assert!(!block_on(is_api_healthy(&transport, &config())));
        // one request per probe
        assert_eq!(transport.requests.borrow().len(), 2);
    }

    #[test]
    fn test_unhealthy_on_network_error() {
        let transport = FakeTransport::answering(Err(TransportError::Network(
            "connection refused".to_string(),
        )));

        let status = block_on(check_api_health(&transport, &config()));

        assert!(!status.is_healthy());
        match status {
            HealthStatus::Unhealthy(e) => assert_eq!(e.reason_code(), "network"),
            other => panic!("expected unhealthy, got {:?}", other),
        }
    }

    #[test]
    fn test_unhealthy_on_timeout() {
        let transport = FakeTransport::answering(Err(TransportError::Timeout(Duration::from_secs(300))));

        match block_on(check_api_health(&transport, &config())) {
            HealthStatus::Unhealthy(e) => assert_eq!(e.reason_code(), "timeout"),
            other => panic!("expected unhealthy, got {:?}", other),
        }
    }

    #[test]
    fn test_unhealthy_on_malformed_body() {
        let transport = FakeTransport::answering(Ok(RawResponse::new(200, "<html>proxy page</html>")));

        match block_on(check_api_health(&transport, &config())) {
            HealthStatus::Unhealthy(e) => assert_eq!(e.reason_code(), "invalid_body"),
            other => panic!("expected unhealthy, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_api_info() {
        let body = r#"{"message":"Audio Processing API","version":"2.0","endpoints":{"/":"root"}}"#;
        let transport = FakeTransport::answering(Ok(RawResponse::new(200, body)));

        let info = block_on(fetch_api_info(&transport, &config())).unwrap();

        assert_eq!(info.version, "2.0");
        assert_eq!(transport.requests.borrow()[0].0, "http://localhost:8000/");
    }

    #[test]
    fn test_fetch_api_info_errors() {
        let transport = FakeTransport::answering(Ok(RawResponse::new(404, "Not Found")));
        assert_eq!(
            block_on(fetch_api_info(&transport, &config())),
            Err(AppError::Server {
                status: 404,
                message: "Not Found".to_string()
            })
        );

        let transport = FakeTransport::answering(Ok(RawResponse::new(200, "{}")));
        assert!(matches!(
            block_on(fetch_api_info(&transport, &config())),
            Err(AppError::Decode(_))
        ));

        let transport = FakeTransport::answering(Err(TransportError::Network("offline".to_string())));
        assert!(matches!(
            block_on(fetch_api_info(&transport, &config())),
            Err(AppError::Network(_))
        ));
    }
}
