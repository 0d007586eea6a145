//! Executing `HttpRequest`s.
//!
//! # Design
//! `Transport` is the seam between the pure core and the network: anything
//! that turns an `HttpRequest` into a `Reply` will do. Tests substitute a
//! scripted transport; production code uses `UreqTransport`.
//!
//! `UreqTransport` disables ureq's status-code-as-error behavior so 4xx/5xx
//! replies come back as data and the core decides what they mean. Only
//! failures that produce no response at all become `TransportError`.

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Reply, TransportError};

/// Performs one HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Reply;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Reply {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a single `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Reply {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();
        let body = request.body.as_deref();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), headers).call(),
            HttpMethod::Delete => {
                let builder = with_headers(self.agent.delete(url), headers);
                match body {
                    Some(bytes) => builder.force_send_body().send(bytes),
                    None => builder.call(),
                }
            }
            HttpMethod::Post => send(with_headers(self.agent.post(url), headers), body),
            HttpMethod::Patch => send(with_headers(self.agent.patch(url), headers), body),
        };

        let mut response = result.map_err(|err| TransportError::new(err.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| TransportError::new(err.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<&[u8]>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(bytes) => builder.send(bytes),
        None => builder.send_empty(),
    }
}
