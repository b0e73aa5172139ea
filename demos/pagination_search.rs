//! Search endpoint combining process-wide defaults with per-endpoint
//! overrides
//!
//! The defaults allow filtering and ordering on `id`; the users endpoint
//! extends the filter fields with `name` and `email` (union with the
//! defaults) and replaces the order fields with `created_at`/`updated_at`.
//! The custom error handler exposes the rejection message to the client.
//!
//! Try:
//!
//! ```text
//! curl 'http://localhost:8080/api/v1/users?s=%7B%22groups%22:%7B%22op%22:%22and%22,%22filters%22:%5B%7B%22field%22:%22name%22,%22op%22:%22eq%22,%22value%22:%22Alice%22%7D%5D%7D,%22limit%22:5%7D'
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

    // Defaults for all search endpoints
    let defaults = SearchConfig::new()
        .query_param("s")
        .max_limit(50)
        .filter_fields(["id"])
        .order_fields(["id"])
        // unlike the built-in handler, answer with the rejection message
        .error_handler(|_req, err| err.clone().into_response());

    let app = Router::new()
        .route("/api/v1/users", get(list_users))
        .layer(SearchLayer::new(
            defaults
                .clone()
                // merge the default filter fields (id) with name and email
                .extra_filter_fields(["name", "email"])
                // replace the default order fields
                .order_fields(["created_at", "updated_at"])
                // tighter ceiling than the default for this endpoint
                .max_limit(10),
        ))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// Echo the validated search request back to the caller
async fn list_users(Search(search): Search) -> impl IntoResponse {
    match search {
        Some(search) => {
            tracing::info!(?search, "search request received");
            Json(search).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
