//! `gloo-net` transport for the session request helper.
//!
//! Client-side (`csr`): real `fetch` calls. Elsewhere every send fails with a
//! transport error so non-browser builds compile and degrade predictably.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use session::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "network requests are only available in the browser build";

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method as FetchMethod, RequestBuilder};
            use session::Method;

            let method = match request.method {
                Method::Get => FetchMethod::GET,
                Method::Post => FetchMethod::POST,
                Method::Put => FetchMethod::PUT,
                Method::Patch => FetchMethod::PATCH,
                Method::Delete => FetchMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let response = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError(UNAVAILABLE.to_owned()))
        }
    }
}
