//! Request extractors whose rejections use the common error body.
//!
//! Every malformed body, path or query string is a 400, axum would
//! otherwise answer 415 or 422 for some of them.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::presentation::api_response;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Rejection))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Rejection))]
pub struct PathParams<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Rejection))]
pub struct QueryParams<T>(pub T);

#[derive(Debug)]
pub struct Rejection(String);

impl From<JsonRejection> for Rejection {
    fn from(value: JsonRejection) -> Self {
        Self(value.body_text())
    }
}

impl From<PathRejection> for Rejection {
    fn from(value: PathRejection) -> Self {
        Self(value.body_text())
    }
}

impl From<QueryRejection> for Rejection {
    fn from(value: QueryRejection) -> Self {
        Self(value.body_text())
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self.0);

        api_response::Error::new(self.0, StatusCode::BAD_REQUEST)
            .into_response()
    }
}
