//! Lifecycle events consumed by the session reducer.

use crate::model::{Role, UserId, UserRecord};

/// Monotonic request tag. Issued by the dispatcher on every `*Request` event and
/// echoed by the matching completion so that late completions can be told apart.
pub type Generation = u64;

/// The independent operation families tracked by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationFamily {
    Login,
    Registration,
    UserFetch,
    RolesFetch,
}

/// Every event the session store can receive.
///
/// The `kind()` strings are the action names the rest of the application logs and
/// matches on.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LoginRequest {
        generation: Generation,
    },
    LoginSuccess {
        generation: Generation,
        user: UserRecord,
        user_id: UserId,
    },
    LoginFailure {
        generation: Generation,
        error: String,
    },
    /// An accepted login whose credentials could not be persisted.
    LoginRevoked {
        generation: Generation,
        error: String,
    },

    AddUserRequest {
        generation: Generation,
    },
    AddUserSuccess {
        generation: Generation,
        /// Whatever the API returned for the created user.
        payload: serde_json::Value,
    },
    AddUserFailure {
        generation: Generation,
        error: String,
    },

    FetchUserRequest {
        generation: Generation,
    },
    FetchUserSuccess {
        generation: Generation,
        user: UserRecord,
    },
    FetchUserFailure {
        generation: Generation,
        error: String,
    },

    FetchRolesRequest {
        generation: Generation,
    },
    FetchRolesSuccess {
        generation: Generation,
        roles: Vec<Role>,
    },
    FetchRolesFailure {
        generation: Generation,
        error: String,
    },

    /// Logout: the session returns to its initial snapshot.
    SessionReset,

    /// An event addressed to some other part of the application.
    Other { kind: String },
}

impl SessionEvent {
    /// Action name of this event.
    pub fn kind(&self) -> &str {
        match self {
            SessionEvent::LoginRequest { .. } => "LOGIN_REQUEST",
            SessionEvent::LoginSuccess { .. } => "LOGIN_SUCCESS",
            SessionEvent::LoginFailure { .. } => "LOGIN_FAILURE",
            SessionEvent::LoginRevoked { .. } => "LOGIN_REVOKED",
            SessionEvent::AddUserRequest { .. } => "ADD_USER_REQUEST",
            SessionEvent::AddUserSuccess { .. } => "ADD_USER_SUCCESS",
            SessionEvent::AddUserFailure { .. } => "ADD_USER_FAILURE",
            SessionEvent::FetchUserRequest { .. } => "FETCH_USER_REQUEST",
            SessionEvent::FetchUserSuccess { .. } => "FETCH_USER_SUCCESS",
            SessionEvent::FetchUserFailure { .. } => "FETCH_USER_FAILURE",
            SessionEvent::FetchRolesRequest { .. } => "FETCH_ROLES_REQUEST",
            SessionEvent::FetchRolesSuccess { .. } => "FETCH_ROLES_SUCCESS",
            SessionEvent::FetchRolesFailure { .. } => "FETCH_ROLES_FAILURE",
            SessionEvent::SessionReset => "SESSION_RESET",
            SessionEvent::Other { kind } => kind,
        }
    }

    /// Family this event belongs to, if it is a lifecycle event.
    pub fn family(&self) -> Option<OperationFamily> {
        use OperationFamily::*;
        match self {
            SessionEvent::LoginRequest { .. }
            | SessionEvent::LoginSuccess { .. }
            | SessionEvent::LoginFailure { .. }
            | SessionEvent::LoginRevoked { .. } => Some(Login),
            SessionEvent::AddUserRequest { .. }
            | SessionEvent::AddUserSuccess { .. }
            | SessionEvent::AddUserFailure { .. } => Some(Registration),
            SessionEvent::FetchUserRequest { .. }
            | SessionEvent::FetchUserSuccess { .. }
            | SessionEvent::FetchUserFailure { .. } => Some(UserFetch),
            SessionEvent::FetchRolesRequest { .. }
            | SessionEvent::FetchRolesSuccess { .. }
            | SessionEvent::FetchRolesFailure { .. } => Some(RolesFetch),
            SessionEvent::SessionReset | SessionEvent::Other { .. } => None,
        }
    }

    /// Whether this event opens a request in its family.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            SessionEvent::LoginRequest { .. }
                | SessionEvent::AddUserRequest { .. }
                | SessionEvent::FetchUserRequest { .. }
                | SessionEvent::FetchRolesRequest { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_family() {
        let event = SessionEvent::FetchRolesSuccess { generation: 3, roles: vec![] };
        assert_eq!(event.kind(), "FETCH_ROLES_SUCCESS");
        assert_eq!(event.family(), Some(OperationFamily::RolesFetch));
        assert!(!event.is_request());

        let other = SessionEvent::Other { kind: "SNACKBAR_CLOSED".into() };
        assert_eq!(other.kind(), "SNACKBAR_CLOSED");
        assert_eq!(other.family(), None);

        assert!(SessionEvent::LoginRequest { generation: 1 }.is_request());
    }
}
