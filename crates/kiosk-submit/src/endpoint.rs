//! Remote submission endpoint
//!
//! The submission client only needs "send bytes, receive bytes": POST a JSON
//! body and get the response text back. [`HttpEndpoint`] does that with
//! reqwest; tests substitute their own implementation.

use std::time::Duration;

use kiosk_core::prelude::*;

/// Something that accepts a JSON body and answers with a diagnostic string
#[trait_variant::make(RemoteEndpoint: Send)]
pub trait LocalRemoteEndpoint {
    /// POST `body` (already serialized JSON), returning the response body
    ///
    /// Non-2xx statuses are errors.
    async fn post_json(&self, body: String) -> Result<String>;

    /// Endpoint description for logs
    fn describe(&self) -> String;
}

/// HTTP POST with `Content-Type: application/json`
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RemoteEndpoint for HttpEndpoint {
    async fn post_json(&self, body: String) -> Result<String> {
        let resp = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::transport(format!("Failed to read response body: {}", e)))?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(Error::http_status(status.as_u16(), text))
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(server: &MockServer) -> HttpEndpoint {
        HttpEndpoint::new(format!("{}/exec", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_post_sends_json_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/exec"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"starRating": 4})))
            .respond_with(ResponseTemplate::new(200).set_body_string("saved"))
            .expect(1)
            .mount(&server)
            .await;

        let body = RemoteEndpoint::post_json(&endpoint(&server), r#"{"starRating":4}"#.into())
            .await
            .unwrap();
        assert_eq!(body, "saved");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = RemoteEndpoint::post_json(&endpoint(&server), "{}".into())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is not listening in test environments
        let ep = HttpEndpoint::new("http://127.0.0.1:9/exec", Duration::from_millis(500)).unwrap();
        let err = RemoteEndpoint::post_json(&ep, "{}".into())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
