//! HTTP transport for the login exchange
//!
//! One POST per call, no retries. The caller may retry a failed
//! negotiation; a fresh request identifier is attached on every call so
//! the service can de-duplicate deliveries.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use url::Url;
use uuid::Uuid;

use crate::protocol::constants::{headers, query, LOGIN_REQUEST_PATH};
use crate::protocol::{LoginRequest, LoginResponse};
use crate::{Error, Result};

/// Response bodies attached to errors are capped at this many characters.
const ERROR_BODY_LIMIT: usize = 512;

/// Target service endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    protocol: String,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint from scheme, host and port.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
        }
    }

    /// Login URL with the configured session context selectors attached.
    pub fn login_url(&self, selectors: &[(&str, &str)]) -> Result<Url> {
        let base = format!("{}://{}:{}", self.protocol, self.host, self.port);
        let mut url = Url::parse(&base)
            .map_err(|e| Error::Config(format!("invalid endpoint {base:?}: {e}")))?;
        url.set_path(LOGIN_REQUEST_PATH);
        for (name, value) in selectors {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}:{}", self.protocol, self.host, self.port)
    }
}

/// Transport invoker: one round trip, classified outcome.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    /// Build the HTTP client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Submit one login request and classify the outcome.
    ///
    /// * 200: body decoded into a [`LoginResponse`] and returned verbatim;
    ///   `success`/`code` are not interpreted here. An undecodable body is
    ///   [`Error::MalformedResponse`], never a credential failure.
    /// * 502/503/504: [`Error::ServiceUnavailable`].
    /// * 401/403: [`Error::ConnectionRejected`].
    /// * Any other status: [`Error::AuthenticationFailed`] with the status
    ///   and a truncated body for diagnostics.
    pub async fn post_login(
        &self,
        mut url: Url,
        user_agent: &str,
        request: &LoginRequest,
        timeout: Duration,
    ) -> Result<LoginResponse> {
        let request_id = Uuid::new_v4().to_string();
        url.query_pairs_mut()
            .append_pair(query::REQUEST_ID, &request_id);

        tracing::debug!(%url, request_id = %request_id, "posting login request");

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .header(ACCEPT, headers::ACCEPT_SNOWFLAKE)
            .header(USER_AGENT, user_agent)
            .timeout(timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| Error::MalformedResponse(e.to_string()));
        }

        match status {
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                Err(Error::ServiceUnavailable {
                    status: status.as_u16(),
                    url: url.to_string(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::ConnectionRejected {
                code: i32::from(status.as_u16()),
                message: format!(
                    "HTTP {} from {}: account name or credentials rejected",
                    status.as_u16(),
                    url
                ),
            }),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::AuthenticationFailed {
                    status: status.as_u16(),
                    url: url.to_string(),
                    body: truncate(&body, ERROR_BODY_LIMIT),
                })
            }
        }
    }
}

fn truncate(body: &str, limit: usize) -> String {
    if body.chars().count() <= limit {
        body.to_string()
    } else {
        body.chars().take(limit).collect()
    }
}
