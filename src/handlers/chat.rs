// POST /chat handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{error, info};
use warp::http::StatusCode;

use crate::config::RelayConfig;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::relay;

pub async fn chat_handler(
    request: ChatRequest,
    config: Arc<RelayConfig>,
) -> Result<impl warp::Reply, Infallible> {
    info!(
        model = request.model.as_deref().unwrap_or("<none>"),
        research_mode = request.research_mode,
        user = request.user_email.as_deref().unwrap_or("<anonymous>"),
        "processing chat request"
    );

    match relay::handle(&config, &request).await {
        Ok(text) => Ok(warp::reply::with_status(
            warp::reply::json(&ChatResponse { response: text }),
            StatusCode::OK,
        )),
        Err(e) => {
            error!(status = %e.status_code(), "chat request failed: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: e.to_string(),
                }),
                e.status_code(),
            ))
        }
    }
}
