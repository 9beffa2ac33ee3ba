use super::Transport;
use crate::error::{Error, ErrorKind, Result};
use crate::sync_method::SyncMethod;
use ::utils::surf_logging::SurfLogging;
use async_trait::async_trait;
use serde_json::Value;
use surf::{Client, Request, Url};

/// [`Transport`] backed by a shared surf client.
#[derive(Clone)]
pub struct SurfTransport {
    http: Client,
}

impl Default for SurfTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            http: client.with(SurfLogging),
        }
    }
}

#[async_trait]
impl Transport for SurfTransport {
    async fn send(&self, method: SyncMethod, target: &str) -> Result<Value> {
        let url = Url::parse(target).map_err(|err| {
            Error::with_source(ErrorKind::Http, format!("invalid target {}", target), err)
        })?;

        let request = Request::new(method.http_method(), url);
        let mut response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::new(
                ErrorKind::Http,
                format!("{} {} returned {}", method, target, status),
            ));
        }

        Ok(response.body_json::<Value>().await?)
    }
}
