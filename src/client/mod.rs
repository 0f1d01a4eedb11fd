//! High-level client entry point

mod config;

pub use config::{ConnectionConfig, ConnectionConfigBuilder};

use crate::connection::{Connection, SessionState};
use crate::protocol::LoginData;
use crate::Result;

/// An authenticated service client.
///
/// Construction runs exactly one login negotiation; a `Client` therefore
/// always holds an established session.
pub struct Client {
    conn: Connection,
    login: LoginData,
}

impl Client {
    /// Connect with the password or OAuth scheme, whichever the
    /// configuration selects.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> snowtide::Result<()> {
    /// use snowtide::{Client, ConnectionConfig};
    ///
    /// let config = ConnectionConfig::builder("acme", "jane")
    ///     .password("secret")
    ///     .warehouse("COMPUTE_WH")
    ///     .build();
    /// let client = Client::connect(config).await?;
    /// println!("session {}", client.session().session_id());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: ConnectionConfig) -> Result<Self> {
        Self::connect_inner(config, b"", b"").await
    }

    /// Connect with an Okta-issued SAML response.
    ///
    /// The caller runs the Okta flow and hands the raw SAML document here;
    /// this crate only submits it.
    pub async fn connect_with_saml(config: ConnectionConfig, saml_response: &[u8]) -> Result<Self> {
        Self::connect_inner(config, saml_response, b"").await
    }

    /// Connect with a browser-acquired assertion and its proof key.
    ///
    /// The caller runs the external-browser flow and hands the resulting
    /// assertion and proof key here; this crate only submits them.
    pub async fn connect_with_browser_proof(
        config: ConnectionConfig,
        assertion: &[u8],
        proof_key: &[u8],
    ) -> Result<Self> {
        Self::connect_inner(config, assertion, proof_key).await
    }

    async fn connect_inner(
        config: ConnectionConfig,
        saml_response: &[u8],
        proof_key: &[u8],
    ) -> Result<Self> {
        let mut conn = Connection::new(config)?;
        let login = conn.authenticate(saml_response, proof_key).await?;
        Ok(Self { conn, login })
    }

    /// The established session record.
    pub fn session(&self) -> &SessionState {
        self.conn.session()
    }

    /// The full login payload returned by the service: display name,
    /// server version, session parameters and session context.
    pub fn login_data(&self) -> &LoginData {
        &self.login
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Consume the client and take the underlying connection, e.g. to run
    /// a fresh negotiation with changed credentials.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}
