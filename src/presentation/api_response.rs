use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use derive_more::Display;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Display, ToSchema)]
enum Status {
    Ok,
    Err,
}

pub trait AsStatusCode {
    fn as_status_code(&self) -> StatusCode;
}

#[derive(ToSchema, Serialize)]
pub struct Message {
    status: Status,
    message: String,
}

impl Message {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: Status::Ok.to_string(),
        }
    }

    pub fn new(message: impl Display) -> Self {
        Self {
            status: Status::Ok,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for Message {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(ToSchema, Serialize)]
pub struct Error {
    status: Status,
    message: String,
    #[serde(skip)]
    status_code: StatusCode,
}

impl Error {
    pub fn new(message: impl Display, status_code: StatusCode) -> Self {
        Self {
            status: Status::Err,
            message: message.to_string(),
            status_code,
        }
    }

    pub fn from_api_error<T>(err: &T) -> Self
    where
        T: AsStatusCode + Display,
    {
        Self::new(err, err.as_status_code())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}
