mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use http::SurfTransport;

use crate::error::Result;
use crate::sync_method::SyncMethod;
use async_trait::async_trait;
use serde_json::Value;

/// Sends a single sync request and returns the decoded JSON body.
///
/// Implementations do not deal with supersession; cancellation is applied
/// by [`crate::RequestHandle`] around the returned future.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: SyncMethod, target: &str) -> Result<Value>;
}
