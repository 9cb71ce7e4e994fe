use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("error fetching information: {0}")]
    Fetch(#[source] hours_notion::StoreError),
    #[error("error updating information: {0}")]
    Update(#[source] hours_notion::StoreError),
    #[error("{0}")]
    NotAcceptable(String),
    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err {
            AppError::NotAcceptable(_) => (406, Some("not_acceptable".to_string())),
            AppError::InvalidInput(_) => (400, Some("invalid_input".to_string())),
            AppError::Fetch(_) | AppError::Update(_) => (500, None),
        };
        Self {
            status,
            message: err.to_string(),
            code,
        }
    }
}
