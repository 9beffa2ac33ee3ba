use super::Transport;
use crate::error::{Error, ErrorKind, Result};
use crate::sync_method::SyncMethod;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use tokio::sync::Notify;

pub(crate) enum Reply {
    Json(Value),
    Fail(String),
    /// Never answers.
    Hold,
    /// Answers once `release` is called.
    Gated(Value),
}

pub(crate) struct MockTransport {
    reply: Reply,
    gate: Notify,
    calls: Mutex<Vec<(SyncMethod, String)>>,
}

impl MockTransport {
    pub(crate) fn new(reply: Reply) -> Self {
        Self {
            reply,
            gate: Notify::new(),
            calls: Mutex::new(vec![]),
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn calls(&self) -> Vec<(SyncMethod, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, method: SyncMethod, target: &str) -> Result<Value> {
        self.calls.lock().unwrap().push((method, target.to_string()));

        match &self.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::Fail(message) => Err(Error::new(ErrorKind::Http, message.clone())),
            Reply::Hold => futures::future::pending().await,
            Reply::Gated(body) => {
                self.gate.notified().await;
                Ok(body.clone())
            }
        }
    }
}
