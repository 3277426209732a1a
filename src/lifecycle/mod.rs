//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the pieces of the admin front end.
//!
//! ## The AdminSystem Pattern
//!
//! [`AdminSystem`] owns the only long-running task, the session store actor, and
//! hands out the components that talk to it:
//!
//! ```rust,ignore
//! let (store_actor, store) = session::new(buffer);
//! let handle = tokio::spawn(store_actor.run());
//!
//! let dispatcher = SessionDispatcher::new(transport.clone(), store, tokens.clone(), notifier.clone());
//! let catalog = CatalogClient::new(transport, tokens.clone(), notifier);
//! let guard = RouteGuard::new(tokens);
//! ```
//!
//! Transport, token store and notifier are trait objects, so tests build the same
//! system around a scripted transport and an in-memory token store
//! ([`AdminSystem::with_parts`]).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the dispatcher** - closes the sender side of the store's inbox
//! 2. **Store detects closure** - `receiver.recv()` returns `None`
//! 3. **Store logs the number of events applied** and exits
//! 4. **Await completion** - [`AdminSystem::shutdown`] joins the task
//!
//! ## Observability
//!
//! See [`setup_tracing`] and the [`tracing`] module.

pub mod admin_system;
pub mod tracing;

pub use admin_system::*;
pub use tracing::*;
