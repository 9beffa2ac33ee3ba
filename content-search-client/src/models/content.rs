use getset::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single content item as returned by the OAE search API.
///
/// Only `tags` is interpreted by the collection. Every other attribute is
/// kept exactly as received in `extra`, so an item round-trips unchanged;
/// the accessors below are read-only views over it. An item without
/// `tags` is read as untagged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct Content {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Content {
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(attribute.into(), value.into());
        self
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.extra.get(attribute)
    }

    fn get_str(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    pub fn display_name(&self) -> Option<&str> {
        self.get_str("displayName")
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.get_str("resourceType")
    }

    pub fn profile_path(&self) -> Option<&str> {
        self.get_str("profilePath")
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }
}
