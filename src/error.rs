use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Parâmetro '{param}' inválido: informe um valor numérico.")]
    InvalidPrice { param: &'static str, value: String },

    #[error("Parâmetros de pesquisa inválidos.")]
    InvalidQuery(String),

    #[error("Hotel não encontrado.")]
    HotelNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPrice { .. } | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::HotelNotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::Database(err) => {
                // Backend details stay in the log.
                log::error!("Erro ao buscar hotéis: {err}");
                "Erro interno do servidor ao buscar hotéis.".to_string()
            }
            ApiError::InvalidPrice { param, value } => {
                log::debug!("Rejected {param}={value:?}");
                self.to_string()
            }
            ApiError::InvalidQuery(detail) => {
                log::debug!("Rejected query string: {detail}");
                self.to_string()
            }
            ApiError::HotelNotFound => self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}
