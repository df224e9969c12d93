//! Landing page and health probes.

use axum::{http::StatusCode, response::Html};

pub async fn home() -> Html<&'static str> {
    Html("<p>Hello from students API!</p>")
}

pub async fn health_ok() -> &'static str {
    "Ok"
}

/// Always fails, for exercising monitors against a broken probe
pub async fn health_bad() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Fail")
}
