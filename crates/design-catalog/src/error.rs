use crate::catalog::browse::SelectionError;
use crate::catalog::compare::CompareError;
use crate::catalog::domain::CatalogError;
use crate::catalog::recommend::{AnswerError, WizardError};
use crate::catalog::service::CatalogServiceError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogError),
    Compare(CompareError),
    Selection(SelectionError),
    Answers(AnswerError),
    Wizard(WizardError),
    Query(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::SystemNotFound(_))
            | AppError::Compare(CompareError::UnknownSystem(_)) => StatusCode::NOT_FOUND,
            AppError::Compare(CompareError::SelectionSize { .. })
            | AppError::Selection(_)
            | AppError::Answers(_)
            | AppError::Wizard(_)
            | AppError::Query(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Compare(err) => write!(f, "compare error: {}", err),
            AppError::Selection(err) => write!(f, "selection error: {}", err),
            AppError::Answers(err) => write!(f, "invalid answers: {}", err),
            AppError::Wizard(err) => write!(f, "wizard error: {}", err),
            AppError::Query(message) => write!(f, "invalid query: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Compare(err) => Some(err),
            AppError::Selection(err) => Some(err),
            AppError::Answers(err) => Some(err),
            AppError::Wizard(err) => Some(err),
            AppError::Query(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<CompareError> for AppError {
    fn from(value: CompareError) -> Self {
        Self::Compare(value)
    }
}

impl From<SelectionError> for AppError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

impl From<AnswerError> for AppError {
    fn from(value: AnswerError) -> Self {
        Self::Answers(value)
    }
}

impl From<WizardError> for AppError {
    fn from(value: WizardError) -> Self {
        Self::Wizard(value)
    }
}

impl From<CatalogServiceError> for AppError {
    fn from(value: CatalogServiceError) -> Self {
        match value {
            CatalogServiceError::Catalog(err) => Self::Catalog(err),
            CatalogServiceError::Compare(err) => Self::Compare(err),
            CatalogServiceError::Answers(err) => Self::Answers(err),
        }
    }
}
