//! Async session authentication for Snowflake-style data warehouses
//!
//! This crate implements the login handshake: it builds an authentication
//! request for the configured credential scheme, submits it in a single
//! HTTP round trip, classifies the outcome, and commits the resulting
//! session tokens onto the connection, all or nothing. It deliberately
//! does **not** pool connections, execute queries, retry, or drive the
//! browser/SAML/OAuth flows that produce credential material; those stay
//! with the caller.
//!
//! Four authenticator schemes are supported: username/password (with
//! optional Duo passcode), pre-acquired OAuth bearer token, browser
//! assertion with proof key, and Okta SAML.
//!
//! # Quick start
//!
//! ```no_run
//! # async fn example() -> snowtide::Result<()> {
//! use snowtide::{Client, ConnectionConfig};
//!
//! let config = ConnectionConfig::builder("acme", "jane")
//!     .password("secret")
//!     .database("PROD")
//!     .warehouse("COMPUTE_WH")
//!     .build();
//!
//! let client = Client::connect(config).await?;
//! let session = client.session();
//! println!(
//!     "session {} on {}",
//!     session.session_id(),
//!     client.login_data().server_version
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Error model
//!
//! Every failure is scoped to the single attempt and typed by what the
//! caller can do about it: [`Error::ServiceUnavailable`] and
//! [`Error::Transport`] are retry-safe, [`Error::ConnectionRejected`]
//! needs changed credentials, [`Error::MalformedResponse`] and
//! [`Error::AuthenticationFailed`] carry diagnostics for escalation. After
//! any attempt the session record is either fully populated or fully
//! cleared, never in between.

pub mod auth;
pub mod client;
pub mod connection;
pub mod error;
pub mod metrics;
pub mod protocol;

pub use auth::Authenticator;
pub use client::{Client, ConnectionConfig, ConnectionConfigBuilder};
pub use connection::{Connection, SessionState};
pub use error::{Error, Result};
pub use protocol::{LoginData, NameValueParameter, SessionInfo};
