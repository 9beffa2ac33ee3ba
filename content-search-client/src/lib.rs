mod collection;
mod config;
mod error;
pub mod models;
mod parse;
mod pending;
mod request;
mod search_options;
mod sync_method;
pub mod transport;


pub use collection::{Applied, ContentCollection};
pub use config::{OaeConfig, DEFAULT_HOST, DEFAULT_PROTOCOL};
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
pub use models::{Content, Group};
pub use parse::ParsedInput;
pub use pending::{PendingRequests, PendingStats, STALE};
pub use request::{RequestHandle, RequestOutcome, RequestState};
pub use search_options::ContentOptions;
pub use sync_method::SyncMethod;
pub use transport::{SurfTransport, Transport};
