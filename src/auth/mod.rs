//! Request construction for the login handshake
//!
//! This module handles:
//! * Authenticator scheme selection (case-insensitive, closed set)
//! * Credential dispatch via [`AuthMethod`], one variant per scheme
//! * Building the login request envelope from connection configuration

mod login;

pub use login::{build_login_request, AuthMethod, ClientInfo, PasscodeHint};

use crate::protocol::constants::authenticator;

/// Supported authenticator schemes.
///
/// Selection is case-insensitive; names outside the closed set fall back to
/// the default username/password scheme, so configuration written for a
/// newer client degrades instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Authenticator {
    /// Username and password, optionally with a Duo passcode.
    #[default]
    Snowflake,

    /// Pre-acquired OAuth bearer token.
    OAuth,

    /// Browser-acquired assertion plus proof key.
    ExternalBrowser,

    /// Okta-issued SAML response.
    Okta,
}

impl Authenticator {
    /// Parse a configured scheme name. Unrecognized names select the
    /// default scheme.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            authenticator::OAUTH => Authenticator::OAuth,
            authenticator::EXTERNAL_BROWSER => Authenticator::ExternalBrowser,
            authenticator::OKTA => Authenticator::Okta,
            _ => Authenticator::Snowflake,
        }
    }

    /// Wire name of the scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Authenticator::Snowflake => authenticator::SNOWFLAKE,
            Authenticator::OAuth => authenticator::OAUTH,
            Authenticator::ExternalBrowser => authenticator::EXTERNAL_BROWSER,
            Authenticator::Okta => authenticator::OKTA,
        }
    }

    /// Lowercase label used on metrics.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Authenticator::Snowflake => "password",
            Authenticator::OAuth => "oauth",
            Authenticator::ExternalBrowser => "external_browser",
            Authenticator::Okta => "okta",
        }
    }
}

impl std::fmt::Display for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
