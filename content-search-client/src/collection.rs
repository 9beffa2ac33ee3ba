use crate::config::OaeConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::models::Content;
use crate::parse;
use crate::pending::{PendingRequests, PendingStats};
use crate::request::{RequestHandle, RequestOutcome};
use crate::search_options::ContentOptions;
use crate::sync_method::SyncMethod;
use crate::transport::Transport;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// What [`ContentCollection::apply`] did with a request outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The records were replaced by this many parsed items.
    Replaced(usize),
    /// The request was cancelled; records are untouched.
    Discarded(String),
}

/// Ordered set of content items backed by the OAE general search endpoint.
pub struct ContentCollection {
    records: Vec<Content>,
    options: ContentOptions,
    config: OaeConfig,
    transport: Arc<dyn Transport>,
    pending: PendingRequests,
}

impl ContentCollection {
    pub fn new(
        records: Vec<Content>,
        options: ContentOptions,
        config: OaeConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            records,
            options: ContentOptions::default().merged(options),
            config,
            transport,
            pending: PendingRequests::new(),
        }
    }

    /// Seeds a collection from a raw body, either a search envelope or a
    /// plain array of items.
    pub fn from_response(
        response: Value,
        options: ContentOptions,
        config: OaeConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let records = Self::parse(response)?;
        Ok(Self::new(records, options, config, transport))
    }

    pub fn url(&self) -> String {
        self.options.search_target(&self.config)
    }

    /// Issues `method` against `target`, cancelling this collection's
    /// previous request for the same method if it is still in flight.
    ///
    /// Must be called from within a tokio runtime; otherwise nothing is
    /// issued and an [`ErrorKind::Runtime`] error is returned.
    pub fn sync(
        &mut self,
        method: SyncMethod,
        target: impl Into<String>,
    ) -> Result<RequestHandle> {
        self.pending.issue(method, target.into(), &self.transport)
    }

    /// Starts a read of the search endpoint for the current options.
    pub fn request(&mut self) -> Result<RequestHandle> {
        let target = self.url();
        self.sync(SyncMethod::Read, target)
    }

    pub fn apply(&mut self, outcome: RequestOutcome) -> Result<Applied> {
        match outcome {
            RequestOutcome::Settled(body) => {
                self.records = Self::parse(body)?;
                Ok(Applied::Replaced(self.records.len()))
            }
            RequestOutcome::Cancelled(reason) => {
                log::debug!("Discarding cancelled request ({})", reason);
                Ok(Applied::Discarded(reason))
            }
            RequestOutcome::Failed(message) => Err(Error::new(ErrorKind::Http, message)),
        }
    }

    pub async fn fetch(&mut self) -> Result<Applied> {
        let handle = self.request()?;
        let outcome = handle.outcome().await;
        self.apply(outcome)
    }

    pub fn parse(response: Value) -> Result<Vec<Content>> {
        parse::parse(response)
    }

    /// Distinct tags across all records, in the order they are first seen.
    pub fn tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|record| record.tags())
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    pub fn options(&self) -> &ContentOptions {
        &self.options
    }

    pub fn update_options(&mut self, options: ContentOptions) -> &mut Self {
        self.options.merge(options);
        self
    }

    pub fn config(&self) -> &OaeConfig {
        &self.config
    }

    pub fn records(&self) -> &[Content] {
        &self.records
    }

    pub fn reset(&mut self, records: Vec<Content>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pending(&self, method: SyncMethod) -> Option<&RequestHandle> {
        self.pending.get(method)
    }

    pub fn pending_stats(&self) -> PendingStats {
        self.pending.stats()
    }
}
