use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::errors::ServiceError;

/// Result type returned by every banking handler
pub type HandlerResult<T> = Result<T, ServiceError>;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response carrying a `Location` header
pub fn created_response<T: Serialize>(location: String, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
        .into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// `?name=` lookup parameter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    #[param(example = "Max Mustermann")]
    pub name: String,
}

/// `?email=` lookup parameter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    #[param(example = "max@x.de")]
    pub email: String,
}

/// `?iban=` lookup parameter; spaces and case are ignored
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IbanQuery {
    #[param(example = "DE12 3456 7890 1234 5678 90")]
    pub iban: String,
}
