//! Connection management
//!
//! This module handles:
//! * The session record and its all-or-nothing commit discipline
//! * The HTTP transport invoker (one round trip, classified outcome)
//! * The negotiation state machine tying the two together

mod conn;
mod session;
mod transport;

pub use conn::Connection;
pub use session::SessionState;
pub use transport::{Endpoint, Transport};
