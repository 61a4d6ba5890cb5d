use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::views;

/// Uniform application error: every handler failure funnels into one of
/// these and is rendered as the generic error page.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 carrying every rule violation, comma-joined.
    pub fn validation(violations: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, violations.join(","))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let page = views::error_page(self.status, &self.message);
        (self.status, Html(page)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
