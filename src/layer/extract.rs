//! Axum extractor for the search request attached by the middleware

use crate::core::request::SearchRequest;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Extractor yielding the validated search request, if any
///
/// `None` means the search parameter was absent on an endpoint where it is
/// not mandatory, or that [`SearchLayer`](crate::layer::SearchLayer) is not
/// mounted on the route. Extraction never fails.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn list_users(Search(search): Search) -> impl IntoResponse {
///     match search {
///         Some(search) => Json(run_query(search)).into_response(),
///         None => StatusCode::NO_CONTENT.into_response(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Search(pub Option<SearchRequest>);

impl Search {
    /// Get the inner search request
    pub fn into_inner(self) -> Option<SearchRequest> {
        self.0
    }
}

impl<S> FromRequestParts<S> for Search
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Search(parts.extensions.get::<SearchRequest>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Request;

    fn parts() -> Parts {
        let req = Request::builder()
            .uri("/")
            .body(axum::body::Body::empty())
            .expect("request should build");
        req.into_parts().0
    }

    #[tokio::test]
    async fn test_extraction_without_attachment_yields_none() {
        let mut parts = parts();

        let Search(search) = Search::from_request_parts(&mut parts, &())
            .await
            .expect("extraction is infallible");
        assert!(search.is_none());
    }

    #[tokio::test]
    async fn test_extraction_with_attachment_yields_request() {
        let mut parts = parts();
        let attached = SearchRequest {
            groups: None,
            order_by: vec![],
            limit: Some(50),
            offset: None,
        };
        parts.extensions.insert(attached.clone());

        let Search(search) = Search::from_request_parts(&mut parts, &())
            .await
            .expect("extraction is infallible");
        assert_eq!(search, Some(attached));
    }
}
