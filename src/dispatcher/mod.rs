//! # Action Dispatcher
//!
//! Runs the session operations (register, login, fetch user, fetch roles) against the
//! API and reports their lifecycle to the session store.
//!
//! Every operation follows the same shape:
//!
//! 1. validate the input (a failure returns immediately: no event, no request),
//! 2. emit the family's `*Request` event tagged with a fresh generation,
//! 3. call the API,
//! 4. emit `*Success` or `*Failure` carrying the same generation.
//!
//! `login` hands its outcome back to the caller as a `Result`, and persists the token
//! only after the store has accepted the success. `register` and
//! `fetch_user_details` complete with `Ok(())` even when the API call fails; the
//! failure is visible only in the session state (and, for registration, as a
//! notification).

pub mod error;

pub use error::*;

use crate::model::{Credentials, LoginResponse, RegistrationInput};
use crate::notify::{Notification, Notifier};
use crate::session::{
    Generation, OperationFamily, Phase, SessionEvent, SessionState, SessionStore,
};
use crate::token_store::{TokenStore, TokenStoreError, TOKEN_KEY, USER_ID_KEY};
use crate::transport::ApiTransport;
use crate::validation::Validate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

pub const REGISTRATION_SUCCESS: &str = "Registration successful!";

/// Issues session operations and emits their lifecycle events.
#[derive(Clone)]
pub struct SessionDispatcher {
    transport: Arc<dyn ApiTransport>,
    store: SessionStore,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    generations: Arc<AtomicU64>,
    persist_lock: Arc<Mutex<()>>,
}

impl SessionDispatcher {
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        store: SessionStore,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            store,
            tokens,
            notifier,
            generations: Arc::new(AtomicU64::new(1)),
            persist_lock: Arc::new(Mutex::new(())),
        }
    }

    fn next_generation(&self) -> Generation {
        self.generations.fetch_add(1, Ordering::SeqCst)
    }

    async fn emit(&self, event: SessionEvent) -> Result<SessionState, DispatchError> {
        debug!(kind = event.kind(), "Emit");
        Ok(self.store.dispatch(event).await?)
    }

    /// Current session snapshot.
    pub async fn snapshot(&self) -> Result<SessionState, DispatchError> {
        Ok(self.store.snapshot().await?)
    }

    /// Registers a new user account.
    #[instrument(skip(self))]
    pub async fn register(&self, input: RegistrationInput) -> Result<(), DispatchError> {
        input.validate()?;

        let generation = self.next_generation();
        self.emit(SessionEvent::AddUserRequest { generation }).await?;

        match self.transport.register(&input).await {
            Ok(payload) => {
                info!(username = %input.username, "User registered");
                self.emit(SessionEvent::AddUserSuccess { generation, payload }).await?;
                self.notifier.notify(Notification::success(REGISTRATION_SUCCESS));
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                let error = e.message();
                self.emit(SessionEvent::AddUserFailure { generation, error: error.clone() })
                    .await?;
                self.notifier.notify(Notification::error(error));
            }
        }
        Ok(())
    }

    /// Logs in and persists the returned token and user id.
    ///
    /// The outcome is both emitted to the store and returned. Credentials are written
    /// only when the store accepted this login as the latest one; a login overtaken by
    /// a newer request returns [`DispatchError::Superseded`] and leaves the stored
    /// credentials alone.
    #[instrument(skip(self))]
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, DispatchError> {
        credentials.validate()?;

        let generation = self.next_generation();
        self.emit(SessionEvent::LoginRequest { generation }).await?;

        let response = match self.transport.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.emit(SessionEvent::LoginFailure { generation, error: e.message() })
                    .await?;
                return Err(DispatchError::Network(e));
            }
        };

        // Held from acceptance until the credentials are written.
        let _persisting = self.persist_lock.lock().await;

        let state = self
            .emit(SessionEvent::LoginSuccess {
                generation,
                user: response.user.clone(),
                user_id: response.user_id.clone(),
            })
            .await?;

        let latest = state.phases.get(OperationFamily::Login);
        if latest.generation != generation || latest.phase != Phase::Ready {
            info!(generation, latest = latest.generation, "Login superseded, not persisted");
            return Err(DispatchError::Superseded);
        }

        if let Err(e) = self.persist_credentials(&response) {
            warn!(error = %e, "Could not persist login");
            self.emit(SessionEvent::LoginRevoked { generation, error: e.to_string() })
                .await?;
            return Err(e.into());
        }

        info!(user_id = %response.user_id, "Logged in");
        Ok(response)
    }

    /// Writes token and user id, or neither.
    fn persist_credentials(&self, response: &LoginResponse) -> Result<(), TokenStoreError> {
        let written = self
            .tokens
            .set(TOKEN_KEY, &response.token)
            .and_then(|()| self.tokens.set(USER_ID_KEY, &response.user_id));
        if written.is_err() {
            for key in [TOKEN_KEY, USER_ID_KEY] {
                if let Err(e) = self.tokens.remove(key) {
                    warn!(key, error = %e, "Could not clear partial login");
                }
            }
        }
        written
    }

    /// Loads the profile of user `id` into the session.
    #[instrument(skip(self))]
    pub async fn fetch_user_details(&self, id: &str) -> Result<(), DispatchError> {
        let generation = self.next_generation();
        self.emit(SessionEvent::FetchUserRequest { generation }).await?;

        match self.transport.fetch_user(id).await {
            Ok(user) => {
                self.emit(SessionEvent::FetchUserSuccess { generation, user }).await?;
            }
            Err(e) => {
                warn!(error = %e, "Fetching user failed");
                self.emit(SessionEvent::FetchUserFailure { generation, error: e.message() })
                    .await?;
            }
        }
        Ok(())
    }

    /// Loads the role list into the session. Never touches `loading` or `error`.
    #[instrument(skip(self))]
    pub async fn fetch_roles(&self) -> Result<(), DispatchError> {
        let generation = self.next_generation();
        self.emit(SessionEvent::FetchRolesRequest { generation }).await?;

        match self.transport.fetch_roles().await {
            Ok(roles) => {
                debug!(count = roles.len(), "Roles fetched");
                self.emit(SessionEvent::FetchRolesSuccess { generation, roles }).await?;
            }
            Err(e) => {
                warn!(error = %e, "Error fetching roles");
                self.emit(SessionEvent::FetchRolesFailure { generation, error: e.message() })
                    .await?;
            }
        }
        Ok(())
    }

    /// Start-up sequence of the members view: roles and, when a user id is
    /// stored, that user's profile, fetched concurrently.
    #[instrument(skip(self))]
    pub async fn restore_session(&self) -> Result<SessionState, DispatchError> {
        let user_id = self.tokens.user_id()?;
        match user_id {
            Some(id) => {
                let (roles, user) = tokio::join!(self.fetch_roles(), self.fetch_user_details(&id));
                roles?;
                user?;
            }
            None => self.fetch_roles().await?,
        }
        self.snapshot().await
    }

    /// Forgets the stored credentials and resets the session.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), DispatchError> {
        let _persisting = self.persist_lock.lock().await;
        self.tokens.remove(TOKEN_KEY)?;
        self.tokens.remove(USER_ID_KEY)?;
        self.emit(SessionEvent::SessionReset).await?;
        info!("Logged out");
        Ok(())
    }
}
