//! Session record
//!
//! The one piece of state a negotiation is allowed to mutate. The record
//! is always in one of two shapes: fully populated (all tokens set,
//! non-negative session identifier) or fully cleared. Every mutation goes
//! through [`SessionState::commit`] with a complete new value, so a
//! partially updated record cannot be observed.

use crate::protocol::constants::NO_SESSION_ID;

/// Session tokens owned by a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    token: String,
    master_token: String,
    session_id: i64,
}

impl SessionState {
    /// The cleared record: empty tokens, session identifier -1.
    pub fn cleared() -> Self {
        Self {
            token: String::new(),
            master_token: String::new(),
            session_id: NO_SESSION_ID,
        }
    }

    /// A populated record.
    pub fn active(
        token: impl Into<String>,
        master_token: impl Into<String>,
        session_id: i64,
    ) -> Self {
        Self {
            token: token.into(),
            master_token: master_token.into(),
            session_id,
        }
    }

    /// Replace the record with a complete new value.
    pub fn commit(&mut self, next: SessionState) {
        *self = next;
    }

    /// Session token for follow-up requests.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Master token for session refresh.
    pub fn master_token(&self) -> &str {
        &self.master_token
    }

    /// Numeric session identifier, -1 when no session is active.
    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    /// Whether a session is currently established.
    pub fn is_active(&self) -> bool {
        self.session_id != NO_SESSION_ID
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::cleared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared() {
        let state = SessionState::default();
        assert_eq!(state.token(), "");
        assert_eq!(state.master_token(), "");
        assert_eq!(state.session_id(), -1);
        assert!(!state.is_active());
    }

    #[test]
    fn commit_replaces_the_whole_record() {
        let mut state = SessionState::default();
        state.commit(SessionState::active("T1", "M1", 7));
        assert_eq!(state.token(), "T1");
        assert_eq!(state.master_token(), "M1");
        assert_eq!(state.session_id(), 7);
        assert!(state.is_active());

        state.commit(SessionState::cleared());
        assert_eq!(state, SessionState::cleared());
        assert!(!state.is_active());
    }
}
