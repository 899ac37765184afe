//! Status codes and response bodies of every error a handler can return.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::api_response::{self, AsStatusCode};
use crate::application::song;
use crate::domain::song::model::ValidationError;
use crate::infra;

impl AsStatusCode for ValidationError {
    fn as_status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl AsStatusCode for infra::Error {
    fn as_status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl AsStatusCode for song::Error {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::Validation(e) => e.as_status_code(),
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::Infra(e) => e.as_status_code(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        api_response::Error::from_api_error(&self).into_response()
    }
}

impl IntoResponse for infra::Error {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => e.print(),
        }

        api_response::Error::from_api_error(&self).into_response()
    }
}

impl IntoResponse for song::Error {
    fn into_response(self) -> Response {
        match self {
            Self::Infra(e) => e.into_response(),
            Self::Validation(e) => e.into_response(),
            other => {
                api_response::Error::from_api_error(&other).into_response()
            }
        }
    }
}
