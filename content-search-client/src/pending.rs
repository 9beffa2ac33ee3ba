use crate::error::Result;
use crate::request::{current_runtime, RequestHandle};
use crate::sync_method::SyncMethod;
use crate::transport::Transport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "graphql")]
use async_graphql::SimpleObject;

/// Cancellation reason given to a request replaced by a newer one for the
/// same method.
pub const STALE: &str = "stale";

/// Latest request per sync method for a single collection.
///
/// Issuing a request for a method whose previous request is still in
/// flight cancels the previous one first, so at most one request per
/// method is live. Entries are replaced, never removed.
#[derive(Debug, Default)]
pub struct PendingRequests {
    requests: HashMap<SyncMethod, RequestHandle>,
    next_id: u64,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any live request for `method` and starts a new one.
    ///
    /// Fails only when no tokio runtime is available, in which case the
    /// table is left untouched.
    pub fn issue(
        &mut self,
        method: SyncMethod,
        target: String,
        transport: &Arc<dyn Transport>,
    ) -> Result<RequestHandle> {
        let runtime = current_runtime(method, &target)?;

        if let Some(previous) = self.requests.get(&method) {
            if previous.cancel(STALE) {
                log::debug!(
                    "Cancelled stale {} request #{} for {}",
                    method,
                    previous.id(),
                    previous.target()
                );
            }
        }

        self.next_id += 1;
        log::debug!("Issuing {} request #{} for {}", method, self.next_id, target);
        let handle =
            RequestHandle::spawn(&runtime, self.next_id, method, target, Arc::clone(transport));
        self.requests.insert(method, handle.clone());

        Ok(handle)
    }

    pub fn get(&self, method: SyncMethod) -> Option<&RequestHandle> {
        self.requests.get(&method)
    }

    pub fn stats(&self) -> PendingStats {
        let live: Vec<&RequestHandle> = self
            .requests
            .values()
            .filter(|handle| !handle.is_settled())
            .collect();

        PendingStats {
            tracked_methods: self.requests.len(),
            live_requests: live.len(),
            oldest_live_since: live.iter().map(|handle| handle.issued_at()).min(),
        }
    }
}

/// Snapshot of a collection's pending-request table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(SimpleObject))]
pub struct PendingStats {
    pub tracked_methods: usize,
    pub live_requests: usize,
    pub oldest_live_since: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestState;
    use crate::transport::mock::{MockTransport, Reply};
    use serde_json::json;

    fn issue(
        pending: &mut PendingRequests,
        method: SyncMethod,
        target: String,
        transport: &Arc<dyn Transport>,
    ) -> RequestHandle {
        pending.issue(method, target, transport).unwrap()
    }

    fn held() -> Arc<dyn Transport> {
        Arc::new(MockTransport::new(Reply::Hold))
    }

    #[tokio::test]
    async fn test_second_read_cancels_first() {
        let transport = held();
        let mut pending = PendingRequests::new();

        let first = issue(&mut pending, SyncMethod::Read, "http://x/1".to_string(), &transport);
        let second = issue(&mut pending, SyncMethod::Read, "http://x/2".to_string(), &transport);

        assert_eq!(first.state(), RequestState::Cancelled(STALE.to_string()));
        assert_eq!(second.state(), RequestState::InFlight);
        assert_eq!(pending.get(SyncMethod::Read), Some(&second));
    }

    #[tokio::test]
    async fn test_methods_do_not_cancel_each_other() {
        let transport = held();
        let mut pending = PendingRequests::new();

        let read = issue(&mut pending, SyncMethod::Read, "http://x/".to_string(), &transport);
        let create = issue(&mut pending, SyncMethod::Create, "http://x/".to_string(), &transport);

        assert_eq!(read.state(), RequestState::InFlight);
        assert_eq!(create.state(), RequestState::InFlight);
        assert_eq!(pending.stats().live_requests, 2);
        assert_eq!(pending.stats().tracked_methods, 2);
    }

    #[tokio::test]
    async fn test_repeated_issues_leave_only_latest_live() {
        let transport = held();
        let mut pending = PendingRequests::new();

        let handles: Vec<_> = (0..5)
            .map(|i| issue(&mut pending, SyncMethod::Read, format!("http://x/{}", i), &transport))
            .collect();

        for handle in &handles[..4] {
            assert_eq!(handle.state(), RequestState::Cancelled(STALE.to_string()));
        }
        assert_eq!(handles[4].state(), RequestState::InFlight);
        assert_eq!(pending.get(SyncMethod::Read).map(|h| h.id()), Some(5));

        let stats = pending.stats();
        assert_eq!(stats.tracked_methods, 1);
        assert_eq!(stats.live_requests, 1);
        assert_eq!(stats.oldest_live_since, Some(handles[4].issued_at()));
    }

    #[tokio::test]
    async fn test_settled_predecessor_is_left_alone() {
        let transport: Arc<dyn Transport> = Arc::new(MockTransport::new(Reply::Json(json!([]))));
        let mut pending = PendingRequests::new();

        let first = issue(&mut pending, SyncMethod::Read, "http://x/".to_string(), &transport);
        first.outcome().await;
        let second = issue(&mut pending, SyncMethod::Read, "http://x/".to_string(), &transport);

        assert_eq!(first.state(), RequestState::Completed);
        assert_eq!(pending.get(SyncMethod::Read), Some(&second));
    }

    #[test]
    fn test_issue_outside_runtime_leaves_table_untouched() {
        let transport = held();
        let mut pending = PendingRequests::new();

        let err = pending
            .issue(SyncMethod::Read, "http://x/".to_string(), &transport)
            .unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Runtime);
        assert!(pending.get(SyncMethod::Read).is_none());
        assert_eq!(pending.stats().tracked_methods, 0);
    }

    #[test]
    fn test_empty_table() {
        let pending = PendingRequests::new();
        assert!(pending.get(SyncMethod::Read).is_none());
        assert_eq!(
            pending.stats(),
            PendingStats {
                tracked_methods: 0,
                live_requests: 0,
                oldest_live_since: None,
            }
        );
    }
}
