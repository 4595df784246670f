#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use hoplink::api::handlers::{catch_all_handler, resolve_handler, shorten_handler};
use hoplink::application::services::{ResolveService, ShortenService};
use hoplink::domain::entities::NewRedirect;
use hoplink::domain::repositories::RedirectRepository;
use hoplink::infrastructure::fallback::HttpFallbackClient;
use hoplink::infrastructure::persistence::InMemoryRedirectRepository;
use hoplink::state::AppState;

pub const SHORT_BASE: &str = "https://sho.rt";

/// State with shortening enabled and neither fallback nor default URL.
pub fn create_test_state(repository: &Arc<InMemoryRedirectRepository>) -> AppState {
    create_test_state_with(repository, Some(SHORT_BASE), None, None)
}

pub fn create_test_state_with(
    repository: &Arc<InMemoryRedirectRepository>,
    short_url: Option<&str>,
    fallback_url: Option<&str>,
    default_url: Option<&str>,
) -> AppState {
    let fallback = Arc::new(HttpFallbackClient::new(Duration::from_secs(2)).unwrap());

    let shorten_service = Arc::new(ShortenService::new(
        repository.clone(),
        short_url.map(str::to_string),
        String::new(),
    ));
    let resolve_service = Arc::new(ResolveService::new(
        repository.clone(),
        fallback,
        fallback_url.map(str::to_string),
        default_url.map(str::to_string),
    ));

    AppState::new(shorten_service, resolve_service)
}

/// Router mirroring the production route table.
pub fn full_router(state: AppState) -> Router {
    Router::new()
        .route("/s", get(shorten_handler))
        .route("/{slug}", get(resolve_handler))
        .route("/", get(catch_all_handler))
        .fallback(catch_all_handler)
        .with_state(state)
}

pub async fn create_test_redirect(repository: &InMemoryRedirectRepository, slug: &str, url: &str) {
    repository
        .insert(NewRedirect {
            slug: slug.to_string(),
            url: url.to_string(),
            hits: 0,
        })
        .await
        .unwrap();
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_delegate(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
