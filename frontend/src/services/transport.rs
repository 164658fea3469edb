//! HTTP transport for backend calls.
//!
//! Every request goes through `fetch` (gloo-net) and is raced against the
//! configured timeout. GET requests go through the [`HttpTransport`] trait so
//! the services built on it can be exercised without a browser.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use web_sys::{AbortController, FormData};

use crate::config::ApiConfig;
use crate::types::AppError;

/// Status and body text of an HTTP answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never produced an HTTP answer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// DNS, connection refused, CORS, aborted body...
    #[error("request failed: {0}")]
    Network(String),

    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Issues GET requests.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, TransportError>;
}

/// Browser `fetch` transport with a per-request timeout.
#[derive(Clone, Copy, Debug)]
pub struct FetchTransport {
    timeout: Duration,
}

impl FetchTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.timeout())
    }

    /// `POST` a multipart form.
    pub async fn post_form(&self, url: &str, form: FormData) -> Result<RawResponse, TransportError> {
        let controller = abort_controller()?;
        let request = Request::post(url)
            .abort_signal(Some(&controller.signal()))
            .body(form)
            .map_err(|e| TransportError::Network(format!("Failed to build request: {}", e)))?;
        self.send(request, controller).await
    }

    /// `POST` a JSON body.
    pub async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<RawResponse, TransportError> {
        let controller = abort_controller()?;
        let request = Request::post(url)
            .abort_signal(Some(&controller.signal()))
            .json(body)
            .map_err(|e| TransportError::Network(format!("Failed to build request: {}", e)))?;
        self.send(request, controller).await
    }

    /// Send `request`, aborting the underlying `fetch` when the timeout wins.
    async fn send(&self, request: Request, controller: AbortController) -> Result<RawResponse, TransportError> {
        let timeout = self.timeout;
        let request = async move {
            let response = request
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            read_response(response).await
        };

        with_timeout(timeout, request, move || {
            log::warn!("⏱️  Request timed out after {} ms, aborting", timeout.as_millis());
            controller.abort();
        })
        .await
    }
}

impl HttpTransport for FetchTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse, TransportError> {
        let controller = abort_controller()?;
        let mut builder = Request::get(url).abort_signal(Some(&controller.signal()));
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build request: {}", e)))?;
        self.send(request, controller).await
    }
}

fn abort_controller() -> Result<AbortController, TransportError> {
    AbortController::new()
        .map_err(|e| TransportError::Network(format!("Failed to create AbortController: {:?}", e)))
}

async fn read_response(response: Response) -> Result<RawResponse, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(format!("Failed to read body: {}", e)))?;
    Ok(RawResponse { status, body })
}

/// Resolve `future`, or fail with [`TransportError::Timeout`] once `timeout` elapses.
///
/// `on_timeout` runs only when the deadline wins.
pub async fn with_timeout<T, F, C>(timeout: Duration, future: F, on_timeout: C) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
    C: FnOnce(),
{
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    with_deadline(timeout, TimeoutFuture::new(millis), future, on_timeout).await
}

/// Race `future` against `deadline`; `timeout` is only reported in the error.
///
/// On a tie the request wins.
pub async fn with_deadline<T, F, D, C>(
    timeout: Duration,
    deadline: D,
    future: F,
    on_timeout: C,
) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
    D: Future<Output = ()>,
    C: FnOnce(),
{
    match select(Box::pin(future), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            on_timeout();
            Err(TransportError::Timeout(timeout))
        }
    }
}
