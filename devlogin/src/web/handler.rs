use axum::{Json, response::IntoResponse};
use serde::Serialize;

use crate::{Error, Result};

#[derive(Serialize)]
pub struct LiveStatus {
    pub status: String,
}

pub async fn health_live_handler() -> impl IntoResponse {
    // Nothing much to check, if it hits this function, it's alive
    Json(LiveStatus {
        status: "UP".to_string(),
    })
}

pub async fn not_found_handler() -> Result<()> {
    Err(Error::NotFound {
        msg: "The page you are looking for cannot be found.".to_string(),
    })
}
