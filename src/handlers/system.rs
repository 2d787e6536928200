// GET /, GET /ping and POST /get_history handlers

use std::convert::Infallible;

use tracing::debug;
use warp::http::StatusCode;

use crate::models::{HistoryResponse, PingResponse};

/// Liveness text for GET /
pub async fn home_handler() -> Result<impl warp::Reply, Infallible> {
    Ok("FunnX.Ai Backend is running!")
}

/// Wake-up endpoint the frontend polls before sending traffic
pub async fn ping_handler() -> Result<impl warp::Reply, Infallible> {
    debug!("received ping request");
    Ok(warp::reply::with_status(
        warp::reply::json(&PingResponse {
            status: "active".to_string(),
            message: "Backend is alive!".to_string(),
        }),
        StatusCode::OK,
    ))
}

/// Always empty: chat history is not persisted anywhere
pub async fn get_history_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&HistoryResponse { history: vec![] }),
        StatusCode::OK,
    ))
}
