use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hours_app::{ApiError, AppError};
use tokio::task::JoinError;
use tracing::error;

/// JSON error reply carrying its own status.
#[derive(Debug)]
pub struct HttpError(ApiError);

impl HttpError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        Self(ApiError::from(err))
    }
}

/// A blocking store call that panicked or was cancelled.
impl From<JoinError> for HttpError {
    fn from(err: JoinError) -> Self {
        Self(ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: format!("worker task failed: {err}"),
            code: None,
        })
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), message = %self.0.message, "request failed");
        }
        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_errors_keep_their_status() {
        let err = HttpError::from(AppError::NotAcceptable("json only".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(err.0.code.as_deref(), Some("not_acceptable"));
    }

    #[tokio::test]
    async fn panicked_worker_is_a_server_error() {
        let join_err = tokio::task::spawn_blocking(|| -> u8 { panic!("boom") })
            .await
            .unwrap_err();
        let err = HttpError::from(join_err);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.0.message.starts_with("worker task failed"));
        assert!(err.into_response().status().is_server_error());
    }
}
