/// Configuration constants for the Cribl REST APIs
pub mod api {
    /// Base path of the control plane API
    pub const CONTROL_PLANE_PATH: &str = "/api/v1";

    /// Base path of the management plane API (relative to the gateway)
    pub const MANAGEMENT_PLANE_PATH: &str = "/v1";

    /// Login endpoint (relative to the control plane base URL)
    pub const LOGIN: &str = "auth/login";

    /// Products endpoint
    pub const PRODUCTS: &str = "products";

    /// Worker groups endpoint (under a product)
    pub const GROUPS: &str = "groups";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint (under an organization)
    pub const WORKSPACES: &str = "workspaces";

    /// OAuth grant used for Cribl.Cloud API credentials
    pub const GRANT_TYPE: &str = "client_credentials";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names
pub mod env {
    pub const ORG_ID: &str = "CRIBL_ORG_ID";
    pub const CLIENT_ID: &str = "CRIBL_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "CRIBL_CLIENT_SECRET";
    pub const WORKSPACE_NAME: &str = "CRIBL_WORKSPACE_NAME";
    pub const DOMAIN: &str = "CRIBL_DOMAIN";
    pub const SERVER_URL: &str = "CRIBL_SERVER_URL";
    pub const USERNAME: &str = "CRIBL_USERNAME";
    pub const PASSWORD: &str = "CRIBL_PASSWORD";
    pub const INSECURE_TLS: &str = "CRIBL_INSECURE_TLS";
}

/// Fallback values used when a variable is unset or empty
pub mod defaults {
    pub const ORG_ID: &str = "your-org-id";
    pub const CLIENT_ID: &str = "your-client-id";
    pub const CLIENT_SECRET: &str = "your-client-secret";
    pub const WORKSPACE_NAME: &str = "main";
    pub const DOMAIN: &str = "cribl.cloud";

    /// Local development leader
    pub const SERVER_URL: &str = "http://localhost:19000";
    pub const USERNAME: &str = "admin";
    pub const PASSWORD: &str = "admin";

    /// Self-signed certificates are accepted unless explicitly disabled
    pub const INSECURE_TLS: &str = "true";

    /// Prefix marking a value copied verbatim from `.env.example`
    pub const PLACEHOLDER_PREFIX: &str = "your-";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
