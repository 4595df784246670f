//! HTTP implementation of the fallback client.

use async_trait::async_trait;
use reqwest::header;
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

use crate::error::AppError;
use crate::infrastructure::fallback::FallbackClient;

/// Fallback client backed by a reqwest HTTP client.
///
/// Redirect following is disabled so the upstream's `Location` header can be
/// captured instead of chased. The response status is not inspected; any
/// response carrying a `Location` header counts as an answer.
pub struct HttpFallbackClient {
    client: reqwest::Client,
}

impl HttpFallbackClient {
    /// Creates a fallback client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fallback`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::fallback(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FallbackClient for HttpFallbackClient {
    async fn redirect_location(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fallback(e.to_string()))?;

        let location = response
            .headers()
            .get(header::LOCATION)
            .ok_or_else(|| AppError::fallback(format!("no Location header from {url}")))?
            .to_str()
            .map_err(|e| AppError::fallback(e.to_string()))?;

        resolve_location(url, location)
    }
}

/// Normalizes a `Location` value to an absolute URL.
///
/// Upstreams are allowed to answer with a relative reference; those are
/// resolved against the request URL.
fn resolve_location(base: &str, location: &str) -> Result<String, AppError> {
    if let Ok(absolute) = Url::parse(location) {
        return Ok(absolute.to_string());
    }

    let base = Url::parse(base).map_err(|e| AppError::fallback(e.to_string()))?;
    let joined = base
        .join(location)
        .map_err(|e| AppError::fallback(e.to_string()))?;

    Ok(joined.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client() -> HttpFallbackClient {
        HttpFallbackClient::new(Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_captures_location_without_following() {
        let router = Router::new().route(
            "/r/{slug}",
            get(|| async {
                (
                    StatusCode::MOVED_PERMANENTLY,
                    [(axum::http::header::LOCATION, "https://example.com/target")],
                )
            }),
        );
        let base = spawn(router).await;

        let location = client()
            .redirect_location(&format!("{base}/r/jR"))
            .await
            .unwrap();

        assert_eq!(location, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_relative_location_is_resolved() {
        let router = Router::new().route(
            "/r/{slug}",
            get(|| async {
                (
                    StatusCode::FOUND,
                    [(axum::http::header::LOCATION, "/moved/here")],
                )
            }),
        );
        let base = spawn(router).await;

        let location = client()
            .redirect_location(&format!("{base}/r/jR"))
            .await
            .unwrap();

        assert_eq!(location, format!("{base}/moved/here"));
    }

    #[tokio::test]
    async fn test_missing_location_is_an_error() {
        let router = Router::new().route("/r/{slug}", get(|| async { "no redirect here" }));
        let base = spawn(router).await;

        let err = client()
            .redirect_location(&format!("{base}/r/jR"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Fallback(_)));
    }

    #[tokio::test]
    async fn test_unreachable_delegate_is_an_error() {
        // Port 1 is reserved and nothing listens there.
        let err = client()
            .redirect_location("http://127.0.0.1:1/r/jR")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Fallback(_)));
    }
}
