use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::views::ErrorView;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    NotFound(String),
    InvalidRequest(String),
    InvalidId(String),
    RenderError(String),
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::InvalidId(id) => write!(f, "Invalid id: {}", id),
            AppError::RenderError(msg) => write!(f, "Render error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        log::error!("❌ MongoDB error: {:?}", e);
        AppError::DatabaseError(e.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::RenderError(e.to_string())
    }
}

/// Every handler failure ends up here and is shown with the same error page
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::RenderError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("⚠️  Request failed: {}", self);

        let message = self.to_string();
        match (ErrorView { error: &message }).render() {
            Ok(body) => HttpResponse::build(self.status_code())
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                log::error!("❌ Failed to render error page: {}", e);
                HttpResponse::build(self.status_code())
                    .content_type("text/plain; charset=utf-8")
                    .body(message)
            }
        }
    }
}
