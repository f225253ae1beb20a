use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;
use task_local_extensions::Extensions;

/// Logs every outgoing request and its outcome at a fixed level. Installed on
/// the client at construction so individual call sites stay free of logging
/// concerns.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        let started = Instant::now();

        let result = next.run(request, extensions).await;
        match result.as_ref() {
            Ok(response) => {
                log!(
                    self.level,
                    "{method} {url} -> {} in {:?}",
                    response.status(),
                    started.elapsed()
                );
            }
            Err(e) => {
                log!(self.level, "{method} {url} failed: {e:?}");
            }
        }
        result
    }
}
