//! # Session Store
//!
//! The authenticated-user state and the pure state machine that evolves it.
//!
//! ## Structure
//!
//! - [`event`] - [`SessionEvent`], the lifecycle events emitted by the dispatcher
//! - [`state`] - [`SessionState`], the snapshot views read
//! - [`reducer`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for `SessionState`
//! - [`new()`] - Factory function that creates the store actor and its client
//!
//! ## Operation families
//!
//! Login, registration, user-detail fetch and role-list fetch each move through
//! `Idle -> Loading -> {Ready, Failed}` on their own. A new request always supersedes
//! the previous one in its family; the superseded request's late completion is ignored.

pub mod event;
pub mod reducer;
pub mod state;

pub use event::*;
pub use state::*;

use crate::framework::{StoreActor, StoreClient};

/// Client handle for the session store.
pub type SessionStore = StoreClient<SessionState>;

/// Creates the session store actor (empty session) and its client.
pub fn new(buffer_size: usize) -> (StoreActor<SessionState>, SessionStore) {
    StoreActor::new(buffer_size, SessionState::default())
}
