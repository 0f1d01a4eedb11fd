//! Login protocol constants

/// Path of the login endpoint, relative to the service host.
pub const LOGIN_REQUEST_PATH: &str = "/session/v1/login-request";

/// Client type reported in the request envelope and User-Agent.
pub const CLIENT_TYPE: &str = "Rust";

/// Driver version reported in the request envelope and User-Agent.
pub const DRIVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session identifier of a connection with no active session.
pub const NO_SESSION_ID: i64 = -1;

/// Outcome code used when the service reports a code that does not parse
/// as an integer.
pub const UNKNOWN_OUTCOME_CODE: i32 = -1;

/// Fixed request headers
pub mod headers {
    /// Content type of the login request body.
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Media type the service answers login requests with.
    pub const ACCEPT_SNOWFLAKE: &str = "application/snowflake";
}

/// Query parameter names on the login URL
pub mod query {
    /// Fresh per-call identifier; lets the service de-duplicate retried
    /// deliveries.
    pub const REQUEST_ID: &str = "requestId";

    /// Initial database selector.
    pub const DATABASE: &str = "databaseName";

    /// Initial schema selector.
    pub const SCHEMA: &str = "schemaName";

    /// Initial warehouse selector.
    pub const WAREHOUSE: &str = "warehouse";

    /// Initial role selector.
    pub const ROLE: &str = "roleName";
}

/// Wire names of the authenticator schemes
pub mod authenticator {
    /// Default username/password scheme.
    pub const SNOWFLAKE: &str = "SNOWFLAKE";

    /// Pre-acquired OAuth bearer token.
    pub const OAUTH: &str = "OAUTH";

    /// Browser-acquired assertion plus proof key.
    pub const EXTERNAL_BROWSER: &str = "EXTERNALBROWSER";

    /// Okta-issued SAML response.
    pub const OKTA: &str = "OKTA";
}
