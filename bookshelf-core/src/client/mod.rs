//! Request hook: one reusable request lifecycle over a fixed base address
//!
//! A [`RequestHook`] issues GET/POST/PUT/DELETE requests, tracks whether any
//! request is in flight, keeps the body of the latest successful response,
//! and raises a transient [`Notification`] for each outcome. Every operation
//! also returns its outcome directly, so callers never have to inspect the
//! notification to learn whether a request failed.
//!
//! Two guards keep overlapping activity from corrupting the shared state:
//!
//! - each request takes a generation number, and a response older than the
//!   newest one already published is returned to its caller but never
//!   written to the shared payload or notification;
//! - each notification takes a sequence number, and its dismiss timer only
//!   hides it while it is still the current notification.

mod state;
mod transport;

pub use state::RequestState;
pub use transport::{ApiRequest, Method, ReqwestTransport, Transport};

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::types::Notification;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Request lifecycle state shared by clones of one hook
pub struct RequestHook<T> {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    state: Arc<watch::Sender<RequestState<T>>>,
    generation: Arc<AtomicU64>,
    sequence: Arc<AtomicU64>,
}

impl<T> Clone for RequestHook<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
            sequence: Arc::clone(&self.sequence),
        }
    }
}

impl<T> RequestHook<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Create a hook that talks HTTP through `reqwest`
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a hook over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            config,
            transport,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    /// Receiver that is notified whenever the state changes
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading()
    }

    pub fn payload(&self) -> Option<T> {
        self.state.borrow().payload.clone()
    }

    pub fn notification(&self) -> Notification {
        self.state.borrow().notification.clone()
    }

    /// GET `path`
    pub async fn get(&self, path: &str, notify_on_success: bool) -> Result<T, RequestError> {
        self.make_request(Method::Get, path, None, notify_on_success)
            .await
    }

    /// POST `body` as JSON to `path`
    pub async fn post<B>(
        &self,
        path: &str,
        body: &B,
        notify_on_success: bool,
    ) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let body = self.encode(path, body)?;
        self.make_request(Method::Post, path, Some(body), notify_on_success)
            .await
    }

    /// PUT `body` as JSON to `path`
    pub async fn update<B>(
        &self,
        path: &str,
        body: &B,
        notify_on_success: bool,
    ) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let body = self.encode(path, body)?;
        self.make_request(Method::Put, path, Some(body), notify_on_success)
            .await
    }

    /// DELETE `path`
    pub async fn remove(&self, path: &str, notify_on_success: bool) -> Result<T, RequestError> {
        self.make_request(Method::Delete, path, None, notify_on_success)
            .await
    }

    /// Clear the notification immediately
    pub fn reset_alert(&self) {
        self.state
            .send_modify(|state| state.notification = Notification::default());
    }

    fn encode<B>(&self, path: &str, body: &B) -> Result<Value, RequestError>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_value(body).map_err(|e| {
            let err = RequestError::Encode(e);
            warn!(path, error = %err, "could not encode request body");
            self.publish(Some(Notification::error(&err)));
            err
        })
    }

    async fn make_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        notify_on_success: bool,
    ) -> Result<T, RequestError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let url = self.config.endpoint(path);
        debug!(%method, %url, generation, "issuing request");

        let guard = InFlight::start(&self.state);
        let outcome = self
            .transport
            .send(ApiRequest {
                method,
                url: url.clone(),
                body,
            })
            .await
            .and_then(|bytes| decode::<T>(&bytes));

        if let Err(err) = &outcome {
            warn!(%method, %url, error = %err, "request failed");
        }

        let mut raised = None;
        self.state.send_modify(|state| {
            if state.claim(generation) {
                if let Ok(payload) = &outcome {
                    state.payload = Some(payload.clone());
                }
                if let Some(notification) = Notification::for_outcome(&outcome, notify_on_success)
                {
                    let notification = self.stamp(notification);
                    raised = Some(notification.sequence);
                    state.notification = notification;
                }
            } else {
                debug!(%method, %url, generation, "discarding stale response");
            }
            state.finish();
        });
        guard.disarm();

        if let Some(sequence) = raised {
            self.schedule_dismiss(sequence);
        }

        outcome
    }

    /// Raise `notification` outside the normal request path
    fn publish(&self, notification: Option<Notification>) {
        if let Some(notification) = notification.map(|n| self.stamp(n)) {
            let sequence = notification.sequence;
            self.state
                .send_modify(|state| state.notification = notification);
            self.schedule_dismiss(sequence);
        }
    }

    fn stamp(&self, mut notification: Notification) -> Notification {
        notification.sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        notification
    }

    fn schedule_dismiss(&self, sequence: u64) {
        let state = Arc::downgrade(&self.state);
        let ttl = self.config.notice_ttl();

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let Some(state) = state.upgrade() else {
                return;
            };
            state.send_if_modified(|state| {
                if state.notification.sequence == sequence && state.notification.visible {
                    state.notification.visible = false;
                    true
                } else {
                    debug!(sequence, "ignoring stale dismiss timer");
                    false
                }
            });
        });
    }
}

/// Decrements the outstanding count if a request future is dropped early
struct InFlight<'a, T> {
    state: Option<&'a watch::Sender<RequestState<T>>>,
}

impl<'a, T> InFlight<'a, T> {
    fn start(state: &'a watch::Sender<RequestState<T>>) -> Self {
        state.send_modify(RequestState::begin);
        Self { state: Some(state) }
    }

    fn disarm(mut self) {
        self.state = None;
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            state.send_modify(RequestState::finish);
        }
    }
}

/// Decode a response body; an empty body reads as JSON `null`
fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RequestError> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(RequestError::Decode)
}
