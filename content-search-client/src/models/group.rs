use crate::config::OaeConfig;
use getset::Getters;
use serde::{Deserialize, Serialize};

const GROUP_PATH: &str = "/api/group/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[get = "pub"]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

impl Group {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            display_name: None,
        }
    }

    /// `<origin>/api/group/` for a new group, `<origin>/api/group/<id>` otherwise.
    pub fn url(&self, config: &OaeConfig) -> String {
        format!(
            "{}{}{}",
            config.origin(),
            GROUP_PATH,
            self.id.as_deref().unwrap_or_default()
        )
    }
}
