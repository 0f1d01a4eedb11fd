//! Login protocol wire types
//!
//! This module defines the JSON envelope exchanged with the login endpoint:
//! * Request: `{"data": {...}}` with SCREAMING_SNAKE field names
//! * Response: `{success, message, code, data}` with camelCase field names

pub mod constants;

mod request;
mod response;

pub use request::{ClientEnvironment, LoginRequest, LoginRequestData};
pub use response::{LoginData, LoginResponse, NameValueParameter, SessionInfo};
