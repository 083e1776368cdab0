use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::warn;

use crate::shared::http::error::ApiFailure;

/// Where the bearer token comes from. The session store implements this; the
/// client reads it fresh on every request so a login or logout mid-session
/// takes effect immediately.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Shared HTTP entry point for every gateway: joins paths onto the configured
/// base URL, attaches `Authorization: Bearer <token>` when a token is stored
/// (and sends the request unauthenticated when none is; rejecting it is the
/// backend's job), and turns non-2xx responses into [`ApiFailure`]s carrying
/// the server's `message` field. One attempt per call, no retries.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.tokens.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send and gate on the status code. A 401 is noted here but not acted
    /// on: the session is kept and the failure surfaces per call, so a stale
    /// token degrades to failed actions rather than a forced re-login.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiFailure> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("backend rejected the stored credentials; session left untouched");
        }

        let message = read_server_message(response).await;
        Err(ApiFailure::Status { status, message })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Best-effort extraction of the `message` field from an error body.
async fn read_server_message(response: Response) -> String {
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|message| message.as_str())
            .unwrap_or_default()
            .to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoToken;

    impl TokenSource for NoToken {
        fn token(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_url_joins_without_duplicate_slashes() {
        let client = ApiClient::new("http://localhost:8080/api/v1/", Arc::new(NoToken));
        assert_eq!(client.url("/careers"), "http://localhost:8080/api/v1/careers");
        assert_eq!(
            client.url("careers/one/abc"),
            "http://localhost:8080/api/v1/careers/one/abc"
        );
    }
}
