//! The session transition function.
//!
//! | Event | Effect (when accepted) |
//! |---|---|
//! | `LOGIN_REQUEST` | loading, error cleared |
//! | `LOGIN_SUCCESS` | user + user id replaced, error cleared |
//! | `LOGIN_FAILURE` | user + user id cleared, error set |
//! | `LOGIN_REVOKED` | undoes the latest accepted login: user + user id cleared, error set |
//! | `FETCH_USER_REQUEST` | loading, error cleared |
//! | `FETCH_USER_SUCCESS` | user replaced, error cleared |
//! | `FETCH_USER_FAILURE` | user cleared, error set |
//! | `FETCH_ROLES_SUCCESS` | roles replaced; nothing else |
//! | `ADD_USER_*`, `FETCH_ROLES_REQUEST/FAILURE` | family phase only |
//! | `SESSION_RESET` | initial snapshot |
//! | anything else | unchanged |
//!
//! A completion is accepted only if it carries the generation of its family's latest
//! request and that request is still loading. Anything else is stale and ignored.
//! `loading` is true while a login or user fetch is in flight.

use crate::framework::StoreEntity;
use crate::session::event::{Generation, OperationFamily, SessionEvent};
use crate::session::state::{FamilyStatus, Phase, SessionState};

impl StoreEntity for SessionState {
    type Event = SessionEvent;

    fn reduce(mut self, event: SessionEvent) -> Self {
        use OperationFamily::*;

        match event {
            SessionEvent::LoginRequest { generation } => {
                self.begin(Login, generation);
                self.error = None;
            }
            SessionEvent::LoginSuccess { generation, user, user_id } => {
                if !self.complete(Login, generation, Phase::Ready) {
                    return self;
                }
                self.user = Some(user);
                self.user_id = Some(user_id);
                self.error = None;
            }
            SessionEvent::LoginFailure { generation, error } => {
                if !self.complete(Login, generation, Phase::Failed) {
                    return self;
                }
                self.user = None;
                self.user_id = None;
                self.error = Some(error);
            }
            SessionEvent::LoginRevoked { generation, error } => {
                let status = self.phases.get_mut(Login);
                if status.phase != Phase::Ready || status.generation != generation {
                    return self;
                }
                status.phase = Phase::Failed;
                self.user = None;
                self.user_id = None;
                self.error = Some(error);
            }

            SessionEvent::FetchUserRequest { generation } => {
                self.begin(UserFetch, generation);
                self.error = None;
            }
            SessionEvent::FetchUserSuccess { generation, user } => {
                if !self.complete(UserFetch, generation, Phase::Ready) {
                    return self;
                }
                self.user = Some(user);
                self.error = None;
            }
            SessionEvent::FetchUserFailure { generation, error } => {
                if !self.complete(UserFetch, generation, Phase::Failed) {
                    return self;
                }
                self.user = None;
                self.error = Some(error);
            }

            SessionEvent::AddUserRequest { generation } => {
                self.begin(Registration, generation);
                return self;
            }
            SessionEvent::AddUserSuccess { generation, .. } => {
                self.complete(Registration, generation, Phase::Ready);
                return self;
            }
            SessionEvent::AddUserFailure { generation, .. } => {
                self.complete(Registration, generation, Phase::Failed);
                return self;
            }

            SessionEvent::FetchRolesRequest { generation } => {
                self.begin(RolesFetch, generation);
                return self;
            }
            SessionEvent::FetchRolesSuccess { generation, roles } => {
                // Roles merge whenever they are not older than the latest request,
                // even if no request was recorded.
                let status = self.phases.get_mut(RolesFetch);
                if generation < status.generation {
                    return self;
                }
                *status = FamilyStatus { phase: Phase::Ready, generation };
                self.roles = roles;
                return self;
            }
            SessionEvent::FetchRolesFailure { generation, .. } => {
                self.complete(RolesFetch, generation, Phase::Failed);
                return self;
            }

            SessionEvent::SessionReset => return SessionState::default(),
            SessionEvent::Other { .. } => return self,
        }

        self.loading = self.is_loading(Login) || self.is_loading(UserFetch);
        self
    }
}

impl SessionState {
    fn begin(&mut self, family: OperationFamily, generation: Generation) {
        *self.phases.get_mut(family) = FamilyStatus {
            phase: Phase::Loading,
            generation,
        };
    }

    /// Moves `family` to `outcome` if `generation` completes its in-flight request.
    fn complete(&mut self, family: OperationFamily, generation: Generation, outcome: Phase) -> bool {
        let status = self.phases.get_mut(family);
        if !status.is_loading() || status.generation != generation {
            return false;
        }
        status.phase = outcome;
        true
    }
}
