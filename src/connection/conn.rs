//! Core connection type
//!
//! [`Connection`] owns the session record and runs the negotiation state
//! machine around a single transport round trip. Two terminal outcomes,
//! nothing persisted in between:
//!
//! * success: token, master token and session identifier are committed to
//!   the session record in one step and the login payload is returned
//! * failure: the record is either left untouched (transport failure) or
//!   fully cleared (service rejection), and a typed error is returned

use std::time::Instant;

use tracing::Instrument;

use super::session::SessionState;
use super::transport::{Endpoint, Transport};
use crate::auth::{build_login_request, ClientInfo};
use crate::client::ConnectionConfig;
use crate::metrics::{counters, histograms, labels};
use crate::protocol::constants::query;
use crate::protocol::LoginData;
use crate::{Error, Result};

/// A connection to the service, holding at most one session.
#[derive(Debug)]
pub struct Connection {
    config: ConnectionConfig,
    client_info: ClientInfo,
    endpoint: Endpoint,
    transport: Transport,
    session: SessionState,
}

impl Connection {
    /// Create a connection from configuration.
    ///
    /// Validates the configuration and captures the client identity
    /// strings once; no network traffic happens until
    /// [`authenticate`](Connection::authenticate).
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        config.validate()?;
        let client_info = ClientInfo::new(config.application.clone());
        let endpoint = Endpoint::new(config.protocol.clone(), config.hostname(), config.port);
        let transport = Transport::new()?;
        Ok(Self {
            config,
            client_info,
            endpoint,
            transport,
            session: SessionState::cleared(),
        })
    }

    /// Connection configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Current session record.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Client identity reported to the service.
    pub fn client_info(&self) -> &ClientInfo {
        &self.client_info
    }

    /// Session context selectors configured for this connection.
    fn selectors(&self) -> Vec<(&'static str, &str)> {
        let mut selectors = Vec::new();
        if let Some(database) = &self.config.database {
            selectors.push((query::DATABASE, database.as_str()));
        }
        if let Some(schema) = &self.config.schema {
            selectors.push((query::SCHEMA, schema.as_str()));
        }
        if let Some(warehouse) = &self.config.warehouse {
            selectors.push((query::WAREHOUSE, warehouse.as_str()));
        }
        if let Some(role) = &self.config.role {
            selectors.push((query::ROLE, role.as_str()));
        }
        selectors
    }

    /// Run one authentication negotiation.
    ///
    /// `saml_response` carries the Okta SAML document or the
    /// browser-acquired assertion; `proof_key` the external-browser proof
    /// key. Both are empty for the password and OAuth schemes. Each call
    /// starts the state machine fresh; nothing carries over from a prior
    /// attempt.
    ///
    /// On success the session record is committed and the login payload
    /// returned. On a service rejection the record is cleared and
    /// [`Error::ConnectionRejected`] carries the service's outcome code
    /// and message. On any transport-level failure (including timeout and
    /// cancellation) the record is left exactly as it was.
    pub async fn authenticate(
        &mut self,
        saml_response: &[u8],
        proof_key: &[u8],
    ) -> Result<LoginData> {
        let scheme = self.config.authenticator.label();
        let span = tracing::info_span!(
            "login",
            account = %self.config.account,
            user = %self.config.user,
            scheme = %self.config.authenticator
        );
        async {
            let started = Instant::now();
            counters::login_attempted(scheme);

            let request =
                build_login_request(&self.config, &self.client_info, saml_response, proof_key);
            let url = self.endpoint.login_url(&self.selectors())?;

            let response = match self
                .transport
                .post_login(
                    url,
                    &self.client_info.user_agent,
                    &request,
                    self.config.login_timeout,
                )
                .await
            {
                Ok(response) => response,
                Err(err) => {
                    // Transport-level failure: the session record stays
                    // untouched so the caller can retry cleanly.
                    counters::login_failed(scheme, failure_reason(&err));
                    return Err(err);
                }
            };

            if !response.success {
                tracing::debug!("authentication rejected by service");
                self.session.commit(SessionState::cleared());
                counters::login_failed(scheme, labels::REASON_REJECTED);
                let message = response
                    .message
                    .unwrap_or_else(|| "authentication rejected".to_string());
                return Err(Error::rejected(response.code.as_deref(), message));
            }

            let data = response.data.ok_or_else(|| {
                counters::login_failed(scheme, labels::REASON_MALFORMED);
                Error::MalformedResponse("success response without session data".to_string())
            })?;

            self.session.commit(SessionState::active(
                data.token.clone(),
                data.master_token.clone(),
                data.session_id,
            ));
            counters::login_successful(scheme);
            histograms::login_duration(scheme, started.elapsed().as_millis() as u64);
            tracing::info!(session_id = data.session_id, "authentication successful");
            Ok(data)
        }
        .instrument(span)
        .await
    }
}

fn failure_reason(err: &Error) -> &'static str {
    match err {
        Error::ConnectionRejected { .. } => labels::REASON_REJECTED,
        Error::MalformedResponse(_) => labels::REASON_MALFORMED,
        Error::AuthenticationFailed { .. } => labels::REASON_HTTP,
        _ => labels::REASON_TRANSPORT,
    }
}
