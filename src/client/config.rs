//! Connection configuration

use std::collections::BTreeMap;
use std::time::Duration;

use crate::auth::Authenticator;
use crate::{Error, Result};

/// Default service port.
pub const DEFAULT_PORT: u16 = 443;

/// Default URL scheme.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Default login timeout.
pub const DEFAULT_LOGIN_TIMEOUT: Duration = Duration::from_secs(60);

const SERVICE_DOMAIN: &str = "snowflakecomputing.com";

/// Connection configuration
///
/// Immutable input to a negotiation attempt: account, user identity,
/// credential material, session context selectors, and endpoint overrides.
/// Use [`ConnectionConfig::builder`] for anything beyond account and user.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Account identifier.
    pub account: String,
    /// Login name.
    pub user: String,
    /// Password (default scheme).
    pub password: Option<String>,
    /// Standalone one-time passcode (default scheme).
    pub passcode: Option<String>,
    /// Whether the password already embeds the passcode.
    pub passcode_in_password: bool,
    /// Pre-acquired OAuth bearer token.
    pub token: Option<String>,
    /// Authenticator scheme.
    pub authenticator: Authenticator,
    /// Initial database.
    pub database: Option<String>,
    /// Initial schema.
    pub schema: Option<String>,
    /// Initial warehouse.
    pub warehouse: Option<String>,
    /// Initial role.
    pub role: Option<String>,
    /// Session parameter overrides. Kept sorted so key collisions after
    /// uppercasing resolve deterministically.
    pub params: BTreeMap<String, String>,
    /// Application identity reported to the service.
    pub application: String,
    /// Timeout for the login round trip.
    pub login_timeout: Duration,
    /// URL scheme (default: `https`).
    pub protocol: String,
    /// Host override. Defaults to `<account>.snowflakecomputing.com`.
    pub host: Option<String>,
    /// Port (default: 443).
    pub port: u16,
    /// Fixed local port a browser flow listened on, if pinned.
    pub browser_redirect_port: Option<u16>,
}

impl ConnectionConfig {
    /// Create a configuration with defaults for everything but account and
    /// user.
    pub fn new(account: impl Into<String>, user: impl Into<String>) -> Self {
        Self::builder(account, user).build()
    }

    /// Create a builder for advanced configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use snowtide::ConnectionConfig;
    /// use std::time::Duration;
    ///
    /// let config = ConnectionConfig::builder("acme", "jane")
    ///     .password("secret")
    ///     .warehouse("COMPUTE_WH")
    ///     .login_timeout(Duration::from_secs(30))
    ///     .build();
    /// ```
    pub fn builder(
        account: impl Into<String>,
        user: impl Into<String>,
    ) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder {
            config: ConnectionConfig {
                account: account.into(),
                user: user.into(),
                password: None,
                passcode: None,
                passcode_in_password: false,
                token: None,
                authenticator: Authenticator::default(),
                database: None,
                schema: None,
                warehouse: None,
                role: None,
                params: BTreeMap::new(),
                application: env!("CARGO_PKG_NAME").to_string(),
                login_timeout: DEFAULT_LOGIN_TIMEOUT,
                protocol: DEFAULT_PROTOCOL.to_string(),
                host: None,
                port: DEFAULT_PORT,
                browser_redirect_port: None,
            },
        }
    }

    /// Hostname the login request goes to.
    pub fn hostname(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => format!("{}.{}", self.account, SERVICE_DOMAIN),
        }
    }

    /// Validate the parts every scheme requires.
    ///
    /// The account is always required. A login name is required for every
    /// scheme except Okta, whose SAML response identifies the user by
    /// itself.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account.is_empty() {
            return Err(Error::Config("account name must not be empty".into()));
        }
        if self.user.is_empty() && self.authenticator != Authenticator::Okta {
            return Err(Error::Config(format!(
                "user must not be empty for the {} scheme",
                self.authenticator
            )));
        }
        Ok(())
    }
}

/// Builder for [`ConnectionConfig`]
#[derive(Debug, Clone)]
pub struct ConnectionConfigBuilder {
    config: ConnectionConfig,
}

impl ConnectionConfigBuilder {
    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set a standalone one-time passcode.
    pub fn passcode(mut self, passcode: impl Into<String>) -> Self {
        self.config.passcode = Some(passcode.into());
        self
    }

    /// Mark the password as already carrying the passcode. Takes
    /// precedence over a standalone passcode.
    pub fn passcode_in_password(mut self, embedded: bool) -> Self {
        self.config.passcode_in_password = embedded;
        self
    }

    /// Set a pre-acquired OAuth bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Select the authenticator scheme.
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.config.authenticator = authenticator;
        self
    }

    /// Select the authenticator scheme by its configured name
    /// (case-insensitive; unknown names select the default scheme).
    pub fn authenticator_name(mut self, name: &str) -> Self {
        self.config.authenticator = Authenticator::parse(name);
        self
    }

    /// Set the initial database.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.config.database = Some(database.into());
        self
    }

    /// Set the initial schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.config.schema = Some(schema.into());
        self
    }

    /// Set the initial warehouse.
    pub fn warehouse(mut self, warehouse: impl Into<String>) -> Self {
        self.config.warehouse = Some(warehouse.into());
        self
    }

    /// Set the initial role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.config.role = Some(role.into());
        self
    }

    /// Add a session parameter override.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.params.insert(key.into(), value.into());
        self
    }

    /// Set the application identity reported to the service.
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.config.application = application.into();
        self
    }

    /// Set the login round-trip timeout.
    ///
    /// Default: 60 seconds. Enforced by the HTTP layer; expiry surfaces as
    /// an ordinary transport failure.
    pub fn login_timeout(mut self, timeout: Duration) -> Self {
        self.config.login_timeout = timeout;
        self
    }

    /// Override the URL scheme (default: `https`).
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.config.protocol = protocol.into();
        self
    }

    /// Override the service host. Without an override the host is derived
    /// from the account as `<account>.snowflakecomputing.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    /// Override the service port (default: 443).
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Pin the local port a browser flow listened on.
    pub fn browser_redirect_port(mut self, port: u16) -> Self {
        self.config.browser_redirect_port = Some(port);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ConnectionConfig {
        self.config
    }
}
