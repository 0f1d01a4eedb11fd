//! Login response wire types
//!
//! The service answers every login request with the same envelope:
//! `{success, message, code, data}`. On success `data` carries the session
//! tokens and server-assigned session parameters; on failure `data` is
//! absent or null and `code`/`message` describe the rejection.

use serde::Deserialize;

/// Top-level login response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the service accepted the credentials.
    pub success: bool,

    /// Human-readable service message, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,

    /// Service outcome code as a decimal string, present on failure.
    #[serde(default)]
    pub code: Option<String>,

    /// Session payload, present on success.
    #[serde(default)]
    pub data: Option<LoginData>,
}

/// Session payload of a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginData {
    /// Session token; authenticates follow-up requests.
    pub token: String,

    /// Master token; used to refresh the session token.
    pub master_token: String,

    /// Numeric session identifier.
    pub session_id: i64,

    /// Session token validity window, seconds.
    pub validity_in_seconds: Option<i64>,

    /// Master token validity window, seconds.
    pub master_validity_in_seconds: Option<i64>,

    /// User display name as known to the service.
    pub display_user_name: String,

    /// Server version string.
    pub server_version: String,

    /// Whether this is the user's first login.
    pub first_login: bool,

    /// Remember-me token, when the service issued one.
    pub rem_me_token: Option<String>,

    /// Remember-me token validity window, seconds.
    pub rem_me_validity_in_seconds: Option<i64>,

    /// Suggested health check interval, seconds.
    pub health_check_interval: Option<i64>,

    /// Client version the service recommends upgrading to.
    pub new_client_for_upgrade: Option<String>,

    /// Server-assigned session parameters.
    pub parameters: Vec<NameValueParameter>,

    /// Effective session context after login.
    pub session_info: SessionInfo,

    /// Token endpoint URL, returned while starting a browser flow.
    pub token_url: Option<String>,

    /// SSO URL, returned while starting a browser flow.
    pub sso_url: Option<String>,

    /// Proof key, returned while starting a browser flow.
    pub proof_key: Option<String>,
}

/// One server-assigned session parameter.
///
/// Values are heterogeneous (strings, numbers, booleans), so they are kept
/// as raw JSON values.
#[derive(Debug, Clone, Deserialize)]
pub struct NameValueParameter {
    /// Parameter name.
    pub name: String,

    /// Parameter value.
    pub value: serde_json::Value,
}

/// Effective session context reported by the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionInfo {
    /// Selected database, if any.
    pub database_name: Option<String>,

    /// Selected schema, if any.
    pub schema_name: Option<String>,

    /// Selected warehouse, if any.
    pub warehouse_name: Option<String>,

    /// Selected role, if any.
    pub role_name: Option<String>,
}
