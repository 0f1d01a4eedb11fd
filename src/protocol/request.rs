//! Login request wire types
//!
//! The login endpoint takes a single JSON envelope `{"data": {...}}`. Field
//! names are the service's SCREAMING_SNAKE identifiers; optional fields are
//! omitted from the body entirely rather than sent empty, so a request never
//! carries fields belonging to another authenticator scheme.

use serde::Serialize;
use std::collections::HashMap;

/// Top-level login request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Request payload.
    pub data: LoginRequestData,
}

/// Login request payload.
///
/// Exactly one authenticator scheme populates the credential fields; the
/// rest stay `None` and are skipped during serialization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequestData {
    /// Client type identifier.
    #[serde(rename = "CLIENT_APP_ID")]
    pub client_app_id: String,

    /// Client version.
    #[serde(rename = "CLIENT_APP_VERSION")]
    pub client_app_version: String,

    /// Account to log in to.
    #[serde(rename = "ACCOUNT_NAME")]
    pub account_name: String,

    /// Login name, for schemes that identify the user themselves.
    #[serde(rename = "LOGIN_NAME", skip_serializing_if = "Option::is_none")]
    pub login_name: Option<String>,

    /// Password, default scheme only.
    #[serde(rename = "PASSWORD", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// SAML response document, Okta scheme only.
    #[serde(rename = "RAW_SAML_RESPONSE", skip_serializing_if = "Option::is_none")]
    pub raw_saml_response: Option<String>,

    /// Duo second-factor delivery hint ("passcode" when one is supplied).
    #[serde(rename = "EXT_AUTHN_DUO_METHOD", skip_serializing_if = "Option::is_none")]
    pub ext_authn_duo_method: Option<String>,

    /// Standalone one-time passcode.
    #[serde(rename = "PASSCODE", skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,

    /// Wire name of the active authenticator scheme. Absent for the
    /// default scheme and Okta.
    #[serde(rename = "AUTHENTICATOR", skip_serializing_if = "Option::is_none")]
    pub authenticator: Option<String>,

    /// Bearer token (OAuth) or browser-acquired assertion (external
    /// browser).
    #[serde(rename = "TOKEN", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Proof key binding the browser-acquired assertion to this client.
    #[serde(rename = "PROOF_KEY", skip_serializing_if = "Option::is_none")]
    pub proof_key: Option<String>,

    /// Fixed local port the browser flow listened on, when the caller
    /// pinned one.
    #[serde(
        rename = "BROWSER_MODE_REDIRECT_PORT",
        skip_serializing_if = "Option::is_none"
    )]
    pub browser_mode_redirect_port: Option<String>,

    /// Session parameter overrides, keys uppercased.
    #[serde(rename = "SESSION_PARAMETERS", skip_serializing_if = "HashMap::is_empty")]
    pub session_parameters: HashMap<String, String>,

    /// Descriptive client environment; never validated by the service.
    #[serde(rename = "CLIENT_ENVIRONMENT")]
    pub client_environment: ClientEnvironment,
}

/// Client environment descriptor sent with every login request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientEnvironment {
    /// Application name declared by the caller.
    #[serde(rename = "APPLICATION")]
    pub application: String,

    /// Operating system name.
    #[serde(rename = "OS")]
    pub os: String,

    /// Runtime/architecture string.
    #[serde(rename = "OS_VERSION")]
    pub os_version: String,
}
