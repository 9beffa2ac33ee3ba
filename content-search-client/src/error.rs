type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ErrorKind {
    /// The transport failed or the server answered with a non-success status.
    #[strum(to_string = "http error")]
    Http,
    /// The response body could not be read as a list of content items.
    #[strum(to_string = "malformed response")]
    MalformedResponse,
    #[strum(to_string = "configuration error")]
    Config,
    #[strum(to_string = "json error")]
    Json,
    /// A request was issued outside of a tokio runtime.
    #[strum(to_string = "runtime error")]
    Runtime,
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<surf::Error> for Error {
    fn from(err: surf::Error) -> Self {
        let message = format!("request failed: {}", err);
        Error::with_source(ErrorKind::Http, message, err.into_inner())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json, err.to_string(), err)
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::with_source(ErrorKind::Config, err.to_string(), err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
