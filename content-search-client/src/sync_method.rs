use surf::http::Method;

/// The operation a sync request performs, named the way the collection's
/// pending-request table keys them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SyncMethod {
    Read,
    Create,
    Update,
    Patch,
    Delete,
}

impl SyncMethod {
    pub fn http_method(&self) -> Method {
        match self {
            SyncMethod::Read => Method::Get,
            SyncMethod::Create => Method::Post,
            SyncMethod::Update => Method::Put,
            SyncMethod::Patch => Method::Patch,
            SyncMethod::Delete => Method::Delete,
        }
    }
}
