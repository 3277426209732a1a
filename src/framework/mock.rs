//! # Mock Store
//!
//! Utilities for testing code that *emits* events.
//!
//! | Feature | Manual mock | RecordingStore | Real StoreActor |
//! |---------|-------------|----------------|-----------------|
//! | **State** | Whatever the test sends | Real reduction | Real reduction |
//! | **Assertions** | One request at a time | Exact event sequence | Resulting state |
//! | **Use Case** | Scripted replies | Testing dispatchers | The full system |
//!
//! Use [`create_mock_store`] + [`expect_dispatch`] to answer each request by hand,
//! or [`RecordingStore`] to capture every event while reducing it like the real store.

use crate::framework::{StoreClient, StoreEntity, StoreRequest};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Creates a client wired to a bare receiver the test drives by hand.
pub fn create_mock_store<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a dispatch.
///
/// Returns `None` if the channel closed or a snapshot request arrived instead.
pub async fn expect_dispatch<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Event, oneshot::Sender<T>)> {
    match receiver.recv().await? {
        StoreRequest::Dispatch { event, respond_to } => Some((event, respond_to)),
        StoreRequest::Snapshot { .. } => None,
    }
}

/// Waits for the next request and returns its responder if it is a snapshot.
pub async fn expect_snapshot<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<T>> {
    match receiver.recv().await? {
        StoreRequest::Snapshot { respond_to } => Some(respond_to),
        StoreRequest::Dispatch { .. } => None,
    }
}

/// A store double that records every dispatched event and reduces it.
///
/// # Example
/// ```ignore
/// let store = RecordingStore::new(SessionState::default());
/// let dispatcher = SessionDispatcher::new(transport, store.client(), tokens, notifier);
/// dispatcher.fetch_user_details("42").await?;
/// let kinds: Vec<_> = store.events().iter().map(|e| e.kind()).collect();
/// assert_eq!(kinds, vec!["FETCH_USER_REQUEST", "FETCH_USER_SUCCESS"]);
/// ```
pub struct RecordingStore<T: StoreEntity> {
    client: StoreClient<T>,
    events: Arc<Mutex<Vec<T::Event>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> RecordingStore<T> {
    /// Spawns the recorder, starting from `initial`.
    pub fn new(initial: T) -> Self {
        let (client, mut receiver) = create_mock_store::<T>(64);
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorded = events.clone();

        let handle = tokio::spawn(async move {
            let mut state = initial;
            while let Some(request) = receiver.recv().await {
                match request {
                    StoreRequest::Dispatch { event, respond_to } => {
                        recorded.lock().push(event.clone());
                        state = state.reduce(event);
                        let _ = respond_to.send(state.clone());
                    }
                    StoreRequest::Snapshot { respond_to } => {
                        let _ = respond_to.send(state.clone());
                    }
                }
            }
        });

        Self {
            client,
            events,
            _handle: handle,
        }
    }

    /// Returns a client that feeds this recorder.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// All events dispatched so far, in arrival order.
    pub fn events(&self) -> Vec<T::Event> {
        self.events.lock().clone()
    }
}
