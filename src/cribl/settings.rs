//! Credential resolution from environment variables and dotenv files

use log::debug;
use std::collections::HashMap;
use std::path::Path;

use crate::config::{defaults, env};
use crate::error::Result;

use super::auth::{AuthFlow, ClientOauth};

/// Source of environment-like key/value pairs
pub trait EnvSource {
    /// Get the raw value for a key, if set
    fn var(&self, key: &str) -> Option<String>;

    /// Get a value, falling back to `default` when unset or empty
    fn var_or(&self, key: &str, default: &str) -> String {
        match self.var(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }
}

/// The process environment
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Load variables from a dotenv file into the process environment.
///
/// With an explicit path the file must exist. Otherwise `.env` is looked up
/// in the current directory and its parents, and a missing file is ignored.
/// Variables already present in the environment are never overridden.
pub fn load_env_files(explicit: Option<&Path>) -> Result<()> {
    match explicit {
        Some(path) => {
            dotenvy::from_path(path)?;
            debug!("Loaded environment from {}", path.display());
        }
        None => match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        },
    }
    Ok(())
}

/// Outcome of resolving credentials
#[derive(Debug)]
pub enum Resolution<T> {
    /// All required values are present
    Ready(T),
    /// Some required values are empty or still placeholders
    Incomplete(MissingCredentials),
}

/// Required variables that are empty or still hold placeholder values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCredentials {
    /// First line of the setup instructions
    pub headline: &'static str,
    /// Names of the offending environment variables
    pub variables: Vec<&'static str>,
}

impl MissingCredentials {
    /// Setup instructions shown instead of attempting any network call
    pub fn instructions(&self) -> String {
        let mut text = format!("{}\n", self.headline);
        for name in &self.variables {
            text.push_str(&format!("   {}\n", name));
        }
        text.push_str("\nCopy .env.example to .env and fill in your values\n");
        text
    }
}

/// Whether a required value is unusable (empty or an unfilled placeholder)
pub fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.starts_with(defaults::PLACEHOLDER_PREFIX)
}

/// Credentials for Cribl.Cloud (control plane and management plane)
#[derive(Clone)]
pub struct CloudSettings {
    pub org_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub workspace: String,
    pub domain: String,
}

impl CloudSettings {
    /// Control plane base URL for the configured workspace
    pub fn control_plane_url(&self) -> String {
        format!(
            "https://{}-{}.{}/api/v1",
            self.workspace, self.org_id, self.domain
        )
    }

    /// Management plane gateway URL
    pub fn management_plane_url(&self) -> String {
        format!("https://gateway.{}", self.domain)
    }

    /// OAuth client-credentials descriptor for this domain
    pub fn client_oauth(&self) -> ClientOauth {
        ClientOauth {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            token_url: format!("https://login.{}/oauth/token", self.domain),
            audience: format!("https://api.{}", self.domain),
        }
    }

    /// Auth flow against the workspace's control plane
    pub fn control_plane_flow(&self) -> AuthFlow {
        AuthFlow::Cloud {
            base_url: self.control_plane_url(),
            oauth: self.client_oauth(),
        }
    }

    /// Auth flow against the management plane gateway
    pub fn management_plane_flow(&self) -> AuthFlow {
        AuthFlow::Cloud {
            base_url: self.management_plane_url(),
            oauth: self.client_oauth(),
        }
    }
}

/// Credentials for an on-prem leader
#[derive(Clone)]
pub struct OnPremSettings {
    pub server_url: String,
    pub username: String,
    pub password: String,
    pub insecure_tls: bool,
}

impl OnPremSettings {
    /// API base URL on the leader
    pub fn api_base_url(&self) -> String {
        format!("{}/api/v1", self.server_url.trim_end_matches('/'))
    }

    /// Certificate verification is skipped only for HTTPS with insecure TLS enabled
    pub fn accepts_invalid_certs(&self) -> bool {
        self.server_url.starts_with("https") && self.insecure_tls
    }

    /// Username/password auth flow against the leader
    pub fn flow(&self) -> AuthFlow {
        AuthFlow::OnPrem {
            base_url: self.api_base_url(),
            username: self.username.clone(),
            password: self.password.clone(),
            accept_invalid_certs: self.accepts_invalid_certs(),
        }
    }
}

/// Resolve Cribl.Cloud credentials
pub fn resolve_cloud(source: &impl EnvSource) -> Resolution<CloudSettings> {
    let settings = CloudSettings {
        org_id: source.var_or(env::ORG_ID, defaults::ORG_ID),
        client_id: source.var_or(env::CLIENT_ID, defaults::CLIENT_ID),
        client_secret: source.var_or(env::CLIENT_SECRET, defaults::CLIENT_SECRET),
        workspace: source.var_or(env::WORKSPACE_NAME, defaults::WORKSPACE_NAME),
        domain: source.var_or(env::DOMAIN, defaults::DOMAIN),
    };

    let variables: Vec<&'static str> = [
        (env::ORG_ID, &settings.org_id),
        (env::CLIENT_ID, &settings.client_id),
        (env::CLIENT_SECRET, &settings.client_secret),
    ]
    .into_iter()
    .filter(|(_, value)| is_placeholder(value))
    .map(|(name, _)| name)
    .collect();

    if !variables.is_empty() {
        debug!("Cloud credentials incomplete: {:?}", variables);
        return Resolution::Incomplete(MissingCredentials {
            headline: "Missing credentials! Set these environment variables:",
            variables,
        });
    }

    debug!(
        "Resolved cloud settings: org={}, workspace={}, domain={}",
        settings.org_id, settings.workspace, settings.domain
    );
    Resolution::Ready(settings)
}

/// Resolve on-prem leader credentials
pub fn resolve_on_prem(source: &impl EnvSource) -> Resolution<OnPremSettings> {
    let settings = OnPremSettings {
        server_url: source.var_or(env::SERVER_URL, defaults::SERVER_URL),
        username: source.var_or(env::USERNAME, defaults::USERNAME),
        password: source.var_or(env::PASSWORD, defaults::PASSWORD),
        insecure_tls: source.var_or(env::INSECURE_TLS, defaults::INSECURE_TLS) != "false",
    };

    if is_placeholder(&settings.server_url) {
        return Resolution::Incomplete(MissingCredentials {
            headline: "Invalid server URL! Set this environment variable:",
            variables: vec![env::SERVER_URL],
        });
    }

    let variables: Vec<&'static str> = [
        (env::USERNAME, &settings.username),
        (env::PASSWORD, &settings.password),
    ]
    .into_iter()
    .filter(|(_, value)| is_placeholder(value))
    .map(|(name, _)| name)
    .collect();

    if !variables.is_empty() {
        return Resolution::Incomplete(MissingCredentials {
            headline: "Missing credentials! Set these environment variables:",
            variables,
        });
    }

    debug!(
        "Resolved on-prem settings: server={}, user={}, insecure_tls={}",
        settings.server_url, settings.username, settings.insecure_tls
    );
    Resolution::Ready(settings)
}
