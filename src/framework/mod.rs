//! Generic single-writer store framework.
//!
//! This module provides the building blocks for keeping a piece of application state
//! behind an actor: one task owns the value, events arrive over a channel, and a pure
//! reducer produces each successor snapshot.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that reducible state types implement
//! - [`StoreActor`] - Generic actor that owns the state
//! - [`StoreClient`] - Cloneable handle for dispatching events and reading snapshots
//! - [`FrameworkError`] - Channel-level failures
//!
//! # Testing
//!
//! See [`mock`] for a recording store that captures emitted events.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
