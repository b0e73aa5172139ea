//! Pagination-only search endpoint
//!
//! Without any filter or order fields configured, the API consumer can only
//! paginate the data. The limit ceiling makes the limit mandatory and
//! bounded.
//!
//! Try:
//!
//! ```text
//! curl 'http://localhost:8080/api/v1/users?q=%7B%22limit%22:5,%22offset%22:0%7D'
//! ```

use qsearch::prelude::*;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // Defaults for all search endpoints: the consumer must send the query
    // parameter, and the limit must be between 0 and 10
    let defaults = SearchConfig::new().max_limit(10);

    let app = Router::new()
        .route("/api/v1/users", get(list_users))
        .layer(SearchLayer::new(defaults))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// Echo the validated search request back to the caller
async fn list_users(Search(search): Search) -> impl IntoResponse {
    match search {
        Some(search) => Json(search).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
