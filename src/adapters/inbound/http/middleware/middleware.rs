use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::any::Any;
use tracing::{error, warn};

use crate::adapters::inbound::http::dto::ErrorResponseDto;

/// Turn a handler panic into a JSON 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseDto::internal_error(&detail)),
    )
        .into_response()
}

/// JSON 404 for any unmatched route
pub async fn not_found(method: Method, uri: Uri) -> Response {
    warn!(%method, %uri, "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponseDto::not_found(&format!(
            "No route for {} {}",
            method,
            uri.path()
        ))),
    )
        .into_response()
}
