use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

// Un error con el campo del formulario al que pertenece, para que el
// admin sepa exactamente qué corregir.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

// Resultado etiquetado que todos los handlers y repositorios comparten:
// o hay datos, o hay un AppError con su código HTTP correspondiente.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Datos de entrada inválidos")]
    Validation(Vec<FieldError>),

    #[error("Recurso no encontrado")]
    NotFound,

    #[error("Credenciales inválidas")]
    Unauthorized,

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Upload(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn field(field: &str, message: &str) -> Self {
        AppError::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    }
}

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        let errors = report
            .iter()
            .map(|(path, error)| FieldError {
                field: path.to_string(),
                message: error.to_string(),
            })
            .collect();
        AppError::Validation(errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::NotFound;
        }

        if let Some(db_err) = e.as_database_error() {
            // Violaciones de unicidad y de claves foráneas sí son mensajes
            // seguros para el usuario final
            if db_err.is_unique_violation() {
                return AppError::Database("Ya existe un registro con ese nombre".to_string());
            }
            if db_err.is_foreign_key_violation() {
                return AppError::Database(
                    "La operación rompe una referencia existente. Revisa las noticias asociadas"
                        .to_string(),
                );
            }
        }

        tracing::error!("Error de base de datos: {:?}", e);
        AppError::Database("Error de base de datos".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, "Recurso no encontrado").into_response()
            }
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Credenciales inválidas").into_response()
            }
            AppError::Database(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
            AppError::Upload(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
