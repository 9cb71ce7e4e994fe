use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use crate::{errors::HttpError, state::HttpState};

/// Runs a store-backed call on the blocking pool.
async fn run_blocking<T, F>(call: F) -> Result<T, HttpError>
where
    F: FnOnce() -> hours_app::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(call).await??)
}

pub async fn health() -> impl IntoResponse {
    Json(app_api::ok())
}

pub async fn worked_hours(State(state): State<HttpState>) -> Result<impl IntoResponse, HttpError> {
    let context = state.context.clone();
    let response = run_blocking(move || app_api::worked_hours(&context)).await?;
    Ok(Json(response))
}

pub async fn fill_worked_hours(
    State(state): State<HttpState>,
) -> Result<impl IntoResponse, HttpError> {
    let context = state.context.clone();
    let response = run_blocking(move || app_api::fill_worked_hours(&context)).await?;
    Ok(Json(response))
}

pub async fn recorded_hours(
    State(state): State<HttpState>,
) -> Result<impl IntoResponse, HttpError> {
    let context = state.context.clone();
    let response = run_blocking(move || app_api::recorded_hours(&context)).await?;
    Ok(Json(response))
}
