use crate::error::{Error, ErrorKind, Result};
use crate::sync_method::SyncMethod;
use crate::transport::Transport;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Observable lifecycle of a request. Every state except `InFlight` is
/// settled, and a request settles exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    InFlight,
    Completed,
    Failed,
    Cancelled(String),
}

impl RequestState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, RequestState::InFlight)
    }
}

/// What a caller receives once a request has settled.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Settled(Value),
    Cancelled(String),
    Failed(String),
}

#[derive(Debug)]
enum Slot {
    InFlight,
    Completed(Value),
    Failed(String),
    Cancelled(String),
}

impl Slot {
    fn is_in_flight(&self) -> bool {
        matches!(self, Slot::InFlight)
    }

    fn state(&self) -> RequestState {
        match self {
            Slot::InFlight => RequestState::InFlight,
            Slot::Completed(_) => RequestState::Completed,
            Slot::Failed(_) => RequestState::Failed,
            Slot::Cancelled(reason) => RequestState::Cancelled(reason.clone()),
        }
    }

    fn outcome(&self) -> Option<RequestOutcome> {
        match self {
            Slot::InFlight => None,
            Slot::Completed(body) => Some(RequestOutcome::Settled(body.clone())),
            Slot::Failed(message) => Some(RequestOutcome::Failed(message.clone())),
            Slot::Cancelled(reason) => Some(RequestOutcome::Cancelled(reason.clone())),
        }
    }
}

#[derive(Debug)]
struct Inner {
    id: u64,
    method: SyncMethod,
    target: String,
    issued_at: DateTime<Utc>,
    slot: watch::Sender<Slot>,
    task: OnceLock<AbortHandle>,
}

impl Inner {
    /// Records the transport's result unless the request already settled.
    fn settle(&self, result: Result<Value>) -> bool {
        let applied = self.slot.send_if_modified(|slot| {
            if !slot.is_in_flight() {
                return false;
            }
            *slot = match result {
                Ok(body) => Slot::Completed(body),
                Err(err) => Slot::Failed(err.to_string()),
            };
            true
        });

        if !applied {
            log::debug!(
                "Ignoring late {} response #{} for {}",
                self.method,
                self.id,
                self.target
            );
        }
        applied
    }
}

/// The runtime new requests are spawned on. Fails with
/// [`ErrorKind::Runtime`] when called outside of one.
pub(crate) fn current_runtime(method: SyncMethod, target: &str) -> Result<Handle> {
    Handle::try_current().map_err(|err| {
        Error::with_source(
            ErrorKind::Runtime,
            format!("cannot issue {} request for {}", method, target),
            err,
        )
    })
}

/// Shared handle to one in-flight sync request.
///
/// Clones observe the same request; the collection keeps one clone in its
/// pending table and hands another to the caller.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    inner: Arc<Inner>,
}

impl RequestHandle {
    /// Starts `method` against `target` on `runtime`.
    pub(crate) fn spawn(
        runtime: &Handle,
        id: u64,
        method: SyncMethod,
        target: String,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let (slot, _) = watch::channel(Slot::InFlight);
        let handle = Self {
            inner: Arc::new(Inner {
                id,
                method,
                target,
                issued_at: Utc::now(),
                slot,
                task: OnceLock::new(),
            }),
        };

        let inner = Arc::clone(&handle.inner);
        let task = runtime.spawn(async move {
            let result = transport.send(inner.method, &inner.target).await;
            inner.settle(result);
        });
        let _ = handle.inner.task.set(task.abort_handle());

        handle
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn method(&self) -> SyncMethod {
        self.inner.method
    }

    pub fn target(&self) -> &str {
        &self.inner.target
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.inner.issued_at
    }

    pub fn age(&self) -> Duration {
        Utc::now() - self.inner.issued_at
    }

    pub fn state(&self) -> RequestState {
        self.inner.slot.borrow().state()
    }

    pub fn is_settled(&self) -> bool {
        !self.inner.slot.borrow().is_in_flight()
    }

    /// Marks the request cancelled with `reason` and stops the transport
    /// task. Returns `false` if the request had already settled.
    pub fn cancel(&self, reason: &str) -> bool {
        let cancelled = self.inner.slot.send_if_modified(|slot| {
            if !slot.is_in_flight() {
                return false;
            }
            *slot = Slot::Cancelled(reason.to_string());
            true
        });

        if cancelled {
            if let Some(task) = self.inner.task.get() {
                task.abort();
            }
        }
        cancelled
    }

    /// Waits until the request settles.
    pub async fn outcome(&self) -> RequestOutcome {
        let mut receiver = self.inner.slot.subscribe();
        let outcome = match receiver.wait_for(|slot| !slot.is_in_flight()).await {
            Ok(slot) => slot.outcome(),
            Err(_) => None,
        };
        outcome.unwrap_or_else(|| RequestOutcome::Failed("request state dropped".to_string()))
    }
}

impl PartialEq for RequestHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for RequestHandle {}
