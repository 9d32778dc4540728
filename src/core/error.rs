use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::templates::TemplateError;

#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("Dataset malformed: {0}")]
    DatasetMalformed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::DatasetUnavailable(ref msg) => {
                tracing::error!("Dataset unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Data wilayah tidak dapat dimuat.",
                )
            }
            AppError::DatasetMalformed(ref msg) => {
                tracing::error!("Dataset malformed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Data wilayah tidak dapat dimuat.",
                )
            }
            AppError::Storage(ref msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Terjadi kesalahan pada server.",
                )
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Terjadi kesalahan pada server.",
                )
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Terjadi kesalahan pada server.",
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Terjadi kesalahan pada server.",
                )
            }
        };

        // The error page skips the template engine so a broken engine cannot
        // take down error reporting as well.
        let body = Html(format!(
            "<!DOCTYPE html>\n<html lang=\"id\"><head><meta charset=\"utf-8\">\
             <title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p></body></html>",
            code = status.as_u16(),
            message = message,
        ));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
