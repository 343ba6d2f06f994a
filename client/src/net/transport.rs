//! Raw HTTP exchange with the recipe service.
//!
//! Client-side (hydrate): [`BrowserTransport`] sends real requests via
//! `gloo-net`. Server-side (SSR) and native builds fail every call with
//! [`ApiError::Unavailable`]; views only talk to the service from the browser.
//!
//! Responses come back as body text so decoding (and its failure mode) stays
//! in `api`, whichever transport carried the request.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

use super::api::ApiError;

/// HTTP verbs the recipe service uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Sends one request and returns the body of a 2xx response.
///
/// # Errors
///
/// [`ApiError::Network`] when the request cannot be sent, [`ApiError::Status`]
/// for a non-2xx answer, [`ApiError::Decode`] when the body cannot be read.
#[async_trait(?Send)]
pub(crate) trait Transport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<String, ApiError>;
}

/// The browser's fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<String, ApiError> {
        fetch(method, url, query, body).await
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(
    method: Method,
    url: &str,
    query: &[(&'static str, String)],
    body: Option<&serde_json::Value>,
) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
    }

    let resp = match body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn fetch(
    method: Method,
    url: &str,
    query: &[(&'static str, String)],
    body: Option<&serde_json::Value>,
) -> Result<String, ApiError> {
    let _ = (method, url, query, body);
    Err(ApiError::Unavailable)
}
