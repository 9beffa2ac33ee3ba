use crate::config::OaeConfig;
use getset::Getters;
use serde::{Deserialize, Serialize};

const SEARCH_PATH: &str = "/api/search/general";
const RESOURCE_TYPES: &str = "content";
const SCOPE: &str = "_tenant";

/// Options that shape the search request issued for a content collection.
///
/// Both fields are optional; an unset `limit` leaves paging to the
/// server's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct ContentOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl ContentOptions {
    pub fn new(keywords: Option<String>, limit: Option<u32>) -> Self {
        Self { keywords, limit }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Overwrites only the fields that are set in `other`.
    pub fn merge(&mut self, other: ContentOptions) {
        if other.keywords.is_some() {
            self.keywords = other.keywords;
        }
        if other.limit.is_some() {
            self.limit = other.limit;
        }
    }

    pub fn merged(mut self, other: ContentOptions) -> Self {
        self.merge(other);
        self
    }

    /// Builds the search URL for these options against `config`'s tenant.
    ///
    /// Zero limits and empty keywords are treated as unset.
    pub fn search_target(&self, config: &OaeConfig) -> String {
        let mut target = format!(
            "{}{}?resourceTypes={}&scope={}",
            config.origin(),
            SEARCH_PATH,
            RESOURCE_TYPES,
            SCOPE
        );

        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            target.push_str(&format!("&limit={}", limit));
        }
        if let Some(keywords) = self.keywords.as_deref().filter(|k| !k.is_empty()) {
            target.push_str("&q=");
            target.push_str(&urlencoding::encode(keywords));
        }

        target
    }
}
