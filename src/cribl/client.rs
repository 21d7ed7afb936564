//! Cribl HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::config::api;
use crate::error::{CriblError, Result};

use super::auth::{ClientOauth, OAuthTokenRequest, OAuthTokenResponse};

/// Transport settings shared by every client built for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Skip TLS certificate verification (self-signed on-prem leaders)
    pub accept_invalid_certs: bool,
}

/// How requests are authenticated
enum Credential {
    None,
    Bearer(String),
    /// Token is fetched on first use and reused for the rest of the run
    ClientOauth {
        scheme: ClientOauth,
        token: OnceCell<String>,
    },
}

/// Cribl API client
pub struct CriblClient {
    client: Client,
    base_url: String,
    credential: Credential,
    transport: TransportOptions,
}

impl CriblClient {
    /// Create an unauthenticated client for the given API base URL
    pub fn new(base_url: &str, transport: TransportOptions) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(transport.accept_invalid_certs)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()?;

        debug!(
            "Created client for {} (accept_invalid_certs={})",
            base_url, transport.accept_invalid_certs
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: Credential::None,
            transport,
        })
    }

    /// Authenticate subsequent requests with a static bearer token
    pub fn with_bearer_token(self, token: String) -> Self {
        Self {
            credential: Credential::Bearer(token),
            ..self
        }
    }

    /// Authenticate subsequent requests with OAuth client credentials
    pub fn with_client_oauth(self, scheme: ClientOauth) -> Self {
        Self {
            credential: Credential::ClientOauth {
                scheme,
                token: OnceCell::new(),
            },
            ..self
        }
    }

    /// API base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether TLS certificate verification is disabled
    pub fn accepts_invalid_certs(&self) -> bool {
        self.transport.accept_invalid_certs
    }

    /// Whether any credential is attached
    pub fn is_authenticated(&self) -> bool {
        !matches!(self.credential, Credential::None)
    }

    /// Build a full URL for a path relative to the base URL
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve the Authorization header value, fetching an OAuth token if needed
    async fn authorization(&self) -> Result<Option<String>> {
        match &self.credential {
            Credential::None => Ok(None),
            Credential::Bearer(token) => Ok(Some(format!("Bearer {}", token))),
            Credential::ClientOauth { scheme, token } => {
                let token = token
                    .get_or_try_init(|| self.fetch_oauth_token(scheme))
                    .await?;
                Ok(Some(format!("Bearer {}", token)))
            }
        }
    }

    /// Add standard headers to a request builder
    async fn with_headers(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        let builder = builder.header("Accept", "application/json");
        Ok(match self.authorization().await? {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        })
    }

    /// Create a GET request builder with standard headers
    pub(crate) async fn get(&self, path: &str) -> Result<reqwest::RequestBuilder> {
        self.with_headers(self.client.get(self.endpoint(path)))
            .await
    }

    /// Create a POST request builder with standard headers
    pub(crate) async fn post(&self, path: &str) -> Result<reqwest::RequestBuilder> {
        self.with_headers(self.client.post(self.endpoint(path)))
            .await
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("Failed to fetch {}", error_context)
            } else {
                format!("Failed to fetch {}: {}", error_context, body.trim())
            };
            return Err(CriblError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Exchange client credentials for an access token
    async fn fetch_oauth_token(&self, scheme: &ClientOauth) -> Result<String> {
        debug!(
            "Requesting OAuth token from {} for client {}",
            scheme.token_url, scheme.client_id
        );

        let request = OAuthTokenRequest {
            grant_type: api::GRANT_TYPE,
            client_id: &scheme.client_id,
            client_secret: &scheme.client_secret,
            audience: &scheme.audience,
        };

        let response = self
            .client
            .post(&scheme.token_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CriblError::Authentication(Box::new(e.into())))?;

        let token: OAuthTokenResponse = self
            .parse_api_response(response, "OAuth token")
            .await
            .map_err(|e| CriblError::Authentication(Box::new(e)))?;

        debug!(
            "Obtained OAuth token (type {:?}, expires in {:?}s)",
            token.token_type, token.expires_in
        );
        Ok(token.access_token)
    }
}

#[cfg(test)]
impl CriblClient {
    /// Create an unauthenticated test client against a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, TransportOptions::default()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Ping {
        ok: bool,
    }

    fn test_oauth(server: &MockServer) -> ClientOauth {
        ClientOauth {
            client_id: "client-123".to_string(),
            client_secret: "s3cret".to_string(),
            token_url: format!("{}/oauth/token", server.uri()),
            audience: "https://api.cribl.cloud".to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CriblClient::test_client("http://localhost:19000/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:19000/api/v1");
        assert_eq!(
            client.endpoint("/auth/login"),
            "http://localhost:19000/api/v1/auth/login"
        );
        assert_eq!(
            client.endpoint("products/stream/groups"),
            "http://localhost:19000/api/v1/products/stream/groups"
        );
    }

    #[test]
    fn test_default_transport_verifies_certs() {
        let client = CriblClient::test_client("https://leader:9000/api/v1");
        assert!(!client.accepts_invalid_certs());
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_insecure_transport_survives_bearer_rebuild() {
        let client = CriblClient::new(
            "https://leader:9000/api/v1",
            TransportOptions {
                accept_invalid_certs: true,
            },
        )
        .unwrap()
        .with_bearer_token("tok".to_string());

        assert!(client.accepts_invalid_certs());
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn test_bearer_token_sent() {
        let mock_server = MockServer::start().await;
        let client = CriblClient::test_client(&mock_server.uri()).with_bearer_token("tok-1".into());

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client.get("ping").await.unwrap().send().await.unwrap();
        let ping: Ping = client.parse_api_response(response, "ping").await.unwrap();
        assert!(ping.ok);
    }

    #[tokio::test]
    async fn test_oauth_token_fetched_once_and_reused() {
        let mock_server = MockServer::start().await;
        let client =
            CriblClient::test_client(&mock_server.uri()).with_client_oauth(test_oauth(&mock_server));

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_json(serde_json::json!({
                "grant_type": "client_credentials",
                "client_id": "client-123",
                "client_secret": "s3cret",
                "audience": "https://api.cribl.cloud"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "oauth-tok",
                "token_type": "Bearer",
                "expires_in": 86400
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("Authorization", "Bearer oauth-tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(2)
            .mount(&mock_server)
            .await;

        for _ in 0..2 {
            let response = client.get("ping").await.unwrap().send().await.unwrap();
            let ping: Ping = client.parse_api_response(response, "ping").await.unwrap();
            assert!(ping.ok);
        }
    }

    #[tokio::test]
    async fn test_oauth_token_failure_is_authentication_error() {
        let mock_server = MockServer::start().await;
        let client =
            CriblClient::test_client(&mock_server.uri()).with_client_oauth(test_oauth(&mock_server));

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("access_denied"))
            .mount(&mock_server)
            .await;

        let err = client.get("ping").await.unwrap_err();
        match err {
            CriblError::Authentication(inner) => match *inner {
                CriblError::Api { status, message } => {
                    assert_eq!(status, 401);
                    assert!(message.contains("access_denied"));
                }
                other => panic!("Expected CriblError::Api, got {:?}", other),
            },
            other => panic!("Expected CriblError::Authentication, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_api_response_error_status() {
        let mock_server = MockServer::start().await;
        let client = CriblClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let response = client.get("ping").await.unwrap().send().await.unwrap();
        let result: Result<Ping> = client.parse_api_response(response, "ping").await;
        match result.unwrap_err() {
            CriblError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Failed to fetch ping");
            }
            other => panic!("Expected CriblError::Api, got {:?}", other),
        }
    }
}
