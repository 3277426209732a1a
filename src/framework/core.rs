//! # Core Store Framework
//!
//! This module defines the generic building blocks for single-writer state stores.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that every reducible state type must implement.
//! - [`StoreActor`]: The generic actor that owns a state value and applies events to it.
//! - [`StoreClient`]: The generic, cloneable client for talking to a `StoreActor`.
//! - [`FrameworkError`]: Errors raised by the plumbing itself (closed or dropped channels).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state type must implement to be owned by a [`StoreActor`].
///
/// # Architecture Note
/// The store never mutates state in place. Every event goes through
/// [`StoreEntity::reduce`], which consumes the current snapshot and returns the
/// next one. Because only the actor task ever calls `reduce`, there is exactly one
/// mutator pipeline and every read is a snapshot read.
///
/// The associated `Event` type ties a state to its own event vocabulary, so a
/// session store can't be fed catalog events by accident.
pub trait StoreEntity: Clone + Debug + Send + Sync + 'static {
    /// The events this state understands.
    type Event: Clone + Debug + Send + Sync + 'static;

    /// Pure transition function: current state + event -> next state.
    ///
    /// Events that do not apply must return `self` unchanged.
    fn reduce(self, event: Self::Event) -> Self;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the store actor.
///
/// - **Dispatch**: apply an event, answer with the resulting snapshot.
/// - **Snapshot**: answer with the current snapshot. Snapshots queue behind any
///   dispatches sent earlier, so a caller always observes its own writes.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Dispatch {
        event: T::Event,
        respond_to: Response<T>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single state value.
///
/// **Concurrency Model**:
/// Events may be dispatched from any number of tasks at once (a login completion
/// and a role-list completion arriving together, say). They all land in one mpsc
/// queue and the actor applies them one at a time, so the state needs no `Mutex`.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    state: T,
    applied: u64,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` seeded with `initial` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the inbox; dispatchers wait when it is full.
    pub fn new(buffer_size: usize, initial: T) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
            applied: 0,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "SessionState" instead of the full path)
        let store_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { event, respond_to } => {
                    debug!(store_type, ?event, "Dispatch");
                    self.state = self.state.clone().reduce(event);
                    self.applied += 1;
                    let _ = respond_to.send(self.state.clone());
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(store_type, applied = self.applied, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe, cheaply cloneable handle to a [`StoreActor`].
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Applies `event` and returns the snapshot produced by it.
    pub async fn dispatch(&self, event: T::Event) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Returns the current snapshot.
    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        total: i64,
        history: Vec<i64>,
    }

    #[derive(Clone, Debug)]
    enum TallyEvent {
        Add(i64),
        Clear,
        Ignored,
    }

    impl StoreEntity for Tally {
        type Event = TallyEvent;

        fn reduce(mut self, event: TallyEvent) -> Self {
            match event {
                TallyEvent::Add(n) => {
                    self.total += n;
                    self.history.push(n);
                }
                TallyEvent::Clear => return Tally::default(),
                TallyEvent::Ignored => {}
            }
            self
        }
    }

    #[tokio::test]
    async fn test_store_applies_events_in_order() {
        let (actor, client) = StoreActor::new(8, Tally::default());
        let handle = tokio::spawn(actor.run());

        client.dispatch(TallyEvent::Add(2)).await.unwrap();
        let after = client.dispatch(TallyEvent::Add(5)).await.unwrap();
        assert_eq!(after.total, 7);
        assert_eq!(after.history, vec![2, 5]);

        let unchanged = client.dispatch(TallyEvent::Ignored).await.unwrap();
        assert_eq!(unchanged, after);

        client.dispatch(TallyEvent::Clear).await.unwrap();
        assert_eq!(client.snapshot().await.unwrap(), Tally::default());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_dispatch_is_serialized() {
        let (actor, client) = StoreActor::new(4, Tally::default());
        let handle = tokio::spawn(actor.run());

        let mut tasks = Vec::new();
        for _ in 0..50 {
            let client = client.clone();
            tasks.push(tokio::spawn(async move {
                client.dispatch(TallyEvent::Add(1)).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let state = client.snapshot().await.unwrap();
        assert_eq!(state.total, 50);
        assert_eq!(state.history.len(), 50);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_store_reports_error() {
        let (actor, client) = StoreActor::new(1, Tally::default());
        drop(actor);

        let err = client.dispatch(TallyEvent::Add(1)).await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
        assert_eq!(client.snapshot().await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
