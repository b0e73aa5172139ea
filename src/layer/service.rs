//! The tower `Layer`/`Service` pair implementing the search middleware

use crate::config::SearchConfig;
use crate::core::error::SearchError;
use crate::core::request::SearchRequest;
use crate::core::validate::validate_search_request;
use axum::extract::{Query, Request};
use axum::http::Uri;
use axum::response::Response;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Layer that parses, validates, and injects a search request
///
/// The configuration is resolved once when the layer is built and shared
/// read-only by every request passing through it.
///
/// # Usage
///
/// ```rust,ignore
/// let defaults = SearchConfig::new().max_limit(50).filter_fields(["id"]);
///
/// let app = Router::new()
///     .route("/api/v1/users", get(list_users))
///     .layer(SearchLayer::new(
///         defaults.clone().extra_filter_fields(["name", "email"]),
///     ));
/// ```
///
/// When the same parameter appears more than once in the query string, the
/// last value wins.
#[derive(Debug, Clone)]
pub struct SearchLayer {
    config: Arc<SearchConfig>,
}

impl SearchLayer {
    /// Create a layer from a resolved configuration
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for SearchLayer {
    /// Layer with the process-wide default configuration
    fn default() -> Self {
        Self::new(SearchConfig::new())
    }
}

impl<S> Layer<S> for SearchLayer {
    type Service = SearchService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SearchService {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Service produced by [`SearchLayer`]
///
/// All decode and validation work happens synchronously before the inner
/// service is called; only the inner future is awaited.
#[derive(Debug, Clone)]
pub struct SearchService<S> {
    inner: S,
    config: Arc<SearchConfig>,
}

impl<S> Service<Request> for SearchService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        // take the service that was driven to readiness, leave the clone
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        match attach_search_request(&mut req, &self.config) {
            Ok(()) => Box::pin(async move { inner.call(req).await }),
            Err(err) => {
                let response = (self.config.handler())(&req, &err);
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

/// Decode and validate the search payload, attaching it to the request
///
/// An absent (or empty) parameter is only an error when the configuration
/// marks the search as mandatory; otherwise the request passes through
/// with nothing attached.
fn attach_search_request(req: &mut Request, config: &SearchConfig) -> Result<(), SearchError> {
    let raw = match query_value(req.uri(), config.param_name()) {
        Some(raw) => raw,
        None => {
            if config.is_mandatory() {
                return Err(SearchError::MissingParameter(
                    config.param_name().to_string(),
                ));
            }
            return Ok(());
        }
    };

    let search: SearchRequest =
        serde_json::from_str(&raw).map_err(|e| SearchError::MalformedPayload(e.to_string()))?;

    validate_search_request(&search, config)?;

    req.extensions_mut().insert(search);

    Ok(())
}

/// Extract the named, URL-decoded query parameter; empty counts as absent
fn query_value(uri: &Uri, name: &str) -> Option<String> {
    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(uri).ok()?;
    params.get(name).filter(|v| !v.is_empty()).cloned()
}
