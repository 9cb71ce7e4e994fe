use axum::{
    body::Body,
    http::{Request, header::ACCEPT},
    middleware::Next,
    response::Response,
};
use hours_app::AppError;
use tracing::debug;

use crate::errors::HttpError;

pub async fn require_json_accept(req: Request<Body>, next: Next) -> Result<Response, HttpError> {
    let accepted = req
        .headers()
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(accepts_json);
    if !accepted {
        debug!(path = %req.uri().path(), "rejecting request without JSON accept");
        return Err(AppError::NotAcceptable(
            "the Accept header must include 'application/json'".to_string(),
        )
        .into());
    }
    Ok(next.run(req).await)
}

fn accepts_json(accept: &str) -> bool {
    accept.contains("application/json") || accept.contains("*/*")
}
