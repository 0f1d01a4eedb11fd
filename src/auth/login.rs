//! Login request construction
//!
//! Pure functions of (configuration, client identity, caller-acquired
//! credential bytes) to a request envelope. Nothing here performs I/O and
//! nothing here can fail; malformed configuration is rejected by the
//! caller before a request is ever built.

use crate::client::ConnectionConfig;
use crate::protocol::constants::{CLIENT_TYPE, DRIVER_VERSION};
use crate::protocol::{ClientEnvironment, LoginRequest, LoginRequestData};

/// Client identity strings reported to the service.
///
/// Computed once per connection and passed into the request builder, so no
/// request construction reaches into process-global state.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// Application name declared by the caller.
    pub application: String,

    /// Operating system name.
    pub os: String,

    /// OS/architecture string.
    pub platform: String,

    /// Value of the `User-Agent` header: `client/version/runtime/platform`.
    pub user_agent: String,
}

impl ClientInfo {
    /// Capture the runtime environment for the given application name.
    pub fn new(application: impl Into<String>) -> Self {
        let platform = format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH);
        let user_agent = format!("{}/{}/rustc/{}", CLIENT_TYPE, DRIVER_VERSION, platform);
        Self {
            application: application.into(),
            os: std::env::consts::OS.to_string(),
            platform,
            user_agent,
        }
    }

    fn environment(&self) -> ClientEnvironment {
        ClientEnvironment {
            application: self.application.clone(),
            os: self.os.clone(),
            os_version: self.platform.clone(),
        }
    }
}

/// How the default scheme delivers a Duo one-time passcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasscodeHint {
    /// No second factor configured.
    None,

    /// The passcode is embedded in the password field.
    InPassword,

    /// The passcode travels in its own request field.
    Separate(String),
}

/// Credential material for one authenticator scheme.
///
/// One variant per scheme, each carrying only the fields that scheme is
/// allowed to send, so a request can never mix credentials from two
/// schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Username/password, the default scheme.
    Snowflake {
        /// Login name.
        login_name: String,
        /// Password, possibly with an embedded passcode.
        password: String,
        /// Passcode delivery, if any.
        passcode: PasscodeHint,
    },

    /// Pre-acquired OAuth bearer token.
    OAuth {
        /// Login name.
        login_name: String,
        /// Bearer token.
        token: String,
    },

    /// Browser-acquired assertion bound to a proof key.
    ExternalBrowser {
        /// Login name.
        login_name: String,
        /// Assertion obtained from the browser flow.
        token: String,
        /// Proof key binding the assertion to this client.
        proof_key: String,
    },

    /// Okta-issued SAML response; identifies the user by itself.
    Okta {
        /// Raw SAML response document.
        saml_response: String,
    },
}

impl AuthMethod {
    /// Select the method for the configured scheme, picking up
    /// caller-acquired credential bytes where the scheme needs them.
    pub fn from_config(
        config: &ConnectionConfig,
        saml_response: &[u8],
        proof_key: &[u8],
    ) -> Self {
        use crate::auth::Authenticator;

        match config.authenticator {
            Authenticator::ExternalBrowser => AuthMethod::ExternalBrowser {
                login_name: config.user.clone(),
                token: String::from_utf8_lossy(saml_response).into_owned(),
                proof_key: String::from_utf8_lossy(proof_key).into_owned(),
            },
            Authenticator::OAuth => AuthMethod::OAuth {
                login_name: config.user.clone(),
                token: config.token.clone().unwrap_or_default(),
            },
            Authenticator::Okta => AuthMethod::Okta {
                saml_response: String::from_utf8_lossy(saml_response).into_owned(),
            },
            Authenticator::Snowflake => AuthMethod::Snowflake {
                login_name: config.user.clone(),
                password: config.password.clone().unwrap_or_default(),
                passcode: PasscodeHint::resolve(config),
            },
        }
    }

    fn apply(self, data: &mut LoginRequestData) {
        use crate::protocol::constants::authenticator;

        match self {
            AuthMethod::Snowflake {
                login_name,
                password,
                passcode,
            } => {
                data.login_name = Some(login_name);
                data.password = Some(password);
                match passcode {
                    PasscodeHint::None => {}
                    PasscodeHint::InPassword => {
                        data.ext_authn_duo_method = Some("passcode".to_string());
                    }
                    PasscodeHint::Separate(code) => {
                        data.passcode = Some(code);
                        data.ext_authn_duo_method = Some("passcode".to_string());
                    }
                }
            }
            AuthMethod::OAuth { login_name, token } => {
                data.login_name = Some(login_name);
                data.token = Some(token);
                data.authenticator = Some(authenticator::OAUTH.to_string());
            }
            AuthMethod::ExternalBrowser {
                login_name,
                token,
                proof_key,
            } => {
                data.login_name = Some(login_name);
                data.token = Some(token);
                data.proof_key = Some(proof_key);
                data.authenticator = Some(authenticator::EXTERNAL_BROWSER.to_string());
            }
            AuthMethod::Okta { saml_response } => {
                data.raw_saml_response = Some(saml_response);
            }
        }
    }
}

impl PasscodeHint {
    /// An embedded passcode takes precedence over a standalone one.
    fn resolve(config: &ConnectionConfig) -> Self {
        if config.passcode_in_password {
            PasscodeHint::InPassword
        } else {
            match &config.passcode {
                Some(code) if !code.is_empty() => PasscodeHint::Separate(code.clone()),
                _ => PasscodeHint::None,
            }
        }
    }
}

/// Build the login request for one negotiation attempt.
///
/// Session parameter keys are uppercased; on collision the
/// lexicographically later original key wins (configuration parameters are
/// kept sorted, so the outcome is deterministic).
pub fn build_login_request(
    config: &ConnectionConfig,
    client: &ClientInfo,
    saml_response: &[u8],
    proof_key: &[u8],
) -> LoginRequest {
    let mut session_parameters = std::collections::HashMap::new();
    for (key, value) in &config.params {
        session_parameters.insert(key.to_uppercase(), value.clone());
    }

    let mut data = LoginRequestData {
        client_app_id: CLIENT_TYPE.to_string(),
        client_app_version: DRIVER_VERSION.to_string(),
        account_name: config.account.clone(),
        session_parameters,
        client_environment: client.environment(),
        browser_mode_redirect_port: config
            .browser_redirect_port
            .map(|port| port.to_string()),
        ..Default::default()
    };

    AuthMethod::from_config(config, saml_response, proof_key).apply(&mut data);

    LoginRequest { data }
}
