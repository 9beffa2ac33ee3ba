use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response, Result};

/// Logs every request sent through a surf [`Client`] together with its
/// status and latency.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(&self, req: Request, client: Client, next: Next<'_>) -> Result<Response> {
        let method = req.method();
        let url = req.url().clone();
        log::debug!("{} {}", method, url);

        let start = Instant::now();
        let response = next.run(req, client).await;
        let elapsed = start.elapsed();

        match &response {
            Ok(res) => log::debug!("{} {} -> {} in {:?}", method, url, res.status(), elapsed),
            Err(err) => log::warn!("{} {} failed after {:?}: {}", method, url, elapsed, err),
        }

        response
    }
}
