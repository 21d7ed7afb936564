//! Authentication flows: OAuth client credentials (cloud) and
//! username/password login (on-prem)

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::config::api;
use crate::error::{error_chain_text, CriblError, Result};

use super::client::{CriblClient, TransportOptions};

/// OAuth client-credentials descriptor
#[derive(Clone, PartialEq, Eq)]
pub struct ClientOauth {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub audience: String,
}

impl fmt::Debug for ClientOauth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOauth")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("audience", &self.audience)
            .finish()
    }
}

/// Body of the client-credentials token request
#[derive(Serialize, Debug)]
pub(crate) struct OAuthTokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub audience: &'a str,
}

/// Token endpoint response
#[derive(Deserialize, Debug)]
pub(crate) struct OAuthTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// Login request for an on-prem leader
#[derive(Serialize, Debug)]
pub struct LoginInfo<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login response from an on-prem leader
#[derive(Deserialize, Debug, Clone)]
pub struct AuthToken {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "forcePasswordChange", default)]
    pub force_password_change: Option<bool>,
}

/// How to authenticate against a Cribl API
#[derive(Debug, Clone)]
pub enum AuthFlow {
    /// Cribl.Cloud: OAuth token acquired lazily by the client
    Cloud { base_url: String, oauth: ClientOauth },
    /// On-prem leader: username/password exchanged for a bearer token
    OnPrem {
        base_url: String,
        username: String,
        password: String,
        accept_invalid_certs: bool,
    },
}

/// Hint printed when a login fails on certificate validation
pub const TLS_HINT: &str = "\nTip: If you're using a self-signed certificate, set:\n   \
                            CRIBL_INSECURE_TLS=true\n   \
                            (Only use this in development/testing environments!)\n";

/// Whether an error message points at certificate validation
pub fn is_tls_error(message: &str) -> bool {
    ["certificate", "x509", "TLS"]
        .iter()
        .any(|needle| message.contains(needle))
}

impl CriblClient {
    /// Exchange username/password for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken> {
        debug!("Logging in as '{}' at {}", username, self.endpoint(api::LOGIN));

        let response = self
            .post(api::LOGIN)
            .await?
            .json(&LoginInfo { username, password })
            .send()
            .await?;

        self.parse_api_response(response, "auth token").await
    }
}

/// Build an authenticated client for the given flow.
///
/// The cloud flow returns immediately; the token is fetched on the first
/// request. The on-prem flow logs in first and rebuilds the client with
/// the returned bearer token.
pub async fn connect<W: Write>(flow: &AuthFlow, out: &mut W) -> Result<CriblClient> {
    match flow {
        AuthFlow::Cloud { base_url, oauth } => {
            debug!("Using OAuth client credentials against {}", base_url);
            Ok(CriblClient::new(base_url, TransportOptions::default())?
                .with_client_oauth(oauth.clone()))
        }
        AuthFlow::OnPrem {
            base_url,
            username,
            password,
            accept_invalid_certs,
        } => {
            writeln!(out, "Connecting to: {}", base_url)?;
            if *accept_invalid_certs {
                writeln!(out, "Accepting self-signed certificates (insecure mode)")?;
            }

            let transport = TransportOptions {
                accept_invalid_certs: *accept_invalid_certs,
            };
            let client = CriblClient::new(base_url, transport)?;

            writeln!(out, "Authenticating with username/password...")?;
            let auth = match client.login(username, password).await {
                Ok(auth) => auth,
                Err(e) => {
                    if is_tls_error(&error_chain_text(&e)) {
                        write!(out, "{}", TLS_HINT)?;
                    }
                    return Err(CriblError::Authentication(Box::new(e)));
                }
            };

            if auth.force_password_change == Some(true) {
                warn!("Leader requests a password change for user '{}'", username);
            }

            let token = auth
                .token
                .filter(|t| !t.is_empty())
                .ok_or(CriblError::MissingToken)?;
            debug!("Received bearer token ({} chars)", token.len());
            writeln!(out, "Authenticated with on-prem server")?;

            Ok(client.with_bearer_token(token))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn on_prem_flow(base_url: &str) -> AuthFlow {
        AuthFlow::OnPrem {
            base_url: base_url.to_string(),
            username: "admin".to_string(),
            password: "hunter2".to_string(),
            accept_invalid_certs: false,
        }
    }

    #[test]
    fn test_is_tls_error() {
        assert!(is_tls_error("invalid peer certificate: UnknownIssuer"));
        assert!(is_tls_error("x509: certificate signed by unknown authority"));
        assert!(is_tls_error("TLS handshake failed"));
        assert!(!is_tls_error("connection refused"));
        assert!(!is_tls_error("tls handshake"));
    }

    #[test]
    fn test_client_oauth_debug_redacts_secret() {
        let oauth = ClientOauth {
            client_id: "id".to_string(),
            client_secret: "super-secret".to_string(),
            token_url: "https://login.cribl.cloud/oauth/token".to_string(),
            audience: "https://api.cribl.cloud".to_string(),
        };
        let text = format!("{:?}", oauth);
        assert!(!text.contains("super-secret"));
        assert!(text.contains("<redacted>"));
    }

    #[test]
    fn test_auth_token_parsing() {
        let auth: AuthToken = serde_json::from_value(serde_json::json!({
            "token": "Bearer-less-token",
            "forcePasswordChange": false
        }))
        .unwrap();
        assert_eq!(auth.token.as_deref(), Some("Bearer-less-token"));
        assert_eq!(auth.force_password_change, Some(false));
    }

    #[tokio::test]
    async fn test_connect_cloud_is_lazy() {
        let flow = AuthFlow::Cloud {
            base_url: "https://main-acme.cribl.cloud/api/v1".to_string(),
            oauth: ClientOauth {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
                token_url: "https://login.cribl.cloud/oauth/token".to_string(),
                audience: "https://api.cribl.cloud".to_string(),
            },
        };
        let mut out = Vec::new();

        let client = connect(&flow, &mut out).await.unwrap();
        assert!(client.is_authenticated());
        assert!(!client.accepts_invalid_certs());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_connect_on_prem_exchanges_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .and(body_json(serde_json::json!({
                "username": "admin",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "leader-token",
                "forcePasswordChange": false
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let flow = on_prem_flow(&format!("{}/api/v1", mock_server.uri()));
        let mut out = Vec::new();

        let client = connect(&flow, &mut out).await.unwrap();
        assert!(client.is_authenticated());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Connecting to:"));
        assert!(text.contains("Authenticated with on-prem server"));
        assert!(!text.contains("leader-token"));
        assert!(!text.contains("insecure mode"));
    }

    #[tokio::test]
    async fn test_connect_on_prem_missing_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let flow = on_prem_flow(&format!("{}/api/v1", mock_server.uri()));
        let mut out = Vec::new();

        let err = connect(&flow, &mut out).await.err().unwrap();
        assert!(matches!(err, CriblError::MissingToken));
    }

    #[tokio::test]
    async fn test_connect_on_prem_bad_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&mock_server)
            .await;

        let flow = on_prem_flow(&format!("{}/api/v1", mock_server.uri()));
        let mut out = Vec::new();

        let err = connect(&flow, &mut out).await.err().unwrap();
        assert!(err.to_string().starts_with("Authentication failed"));
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("self-signed certificate"));
    }

    #[tokio::test]
    async fn test_connect_on_prem_certificate_error_prints_hint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(502)
                    .set_body_string("x509: certificate signed by unknown authority"),
            )
            .mount(&mock_server)
            .await;

        let flow = on_prem_flow(&format!("{}/api/v1", mock_server.uri()));
        let mut out = Vec::new();

        let err = connect(&flow, &mut out).await.err().unwrap();
        assert!(matches!(err, CriblError::Authentication(_)));

        let text = String::from_utf8(out).unwrap();
        let hint_at = text.find("CRIBL_INSECURE_TLS=true").unwrap();
        let auth_at = text.find("Authenticating with username/password").unwrap();
        assert!(auth_at < hint_at);
    }
}
