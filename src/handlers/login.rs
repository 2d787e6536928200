// POST /login handler

use std::convert::Infallible;

use tracing::info;
use warp::http::StatusCode;

use crate::models::{ErrorResponse, LoginRequest, LoginResponse};

/// Accept-all login stub
///
/// Any email/password pair succeeds; nothing is verified or stored. This
/// is an identity pass-through, not authentication.
pub async fn login_handler(request: LoginRequest) -> Result<impl warp::Reply, Infallible> {
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Ok(warp::reply::with_status(
            warp::reply::json(&ErrorResponse {
                error: "Email and password are required.".to_string(),
            }),
            StatusCode::BAD_REQUEST,
        ));
    }

    info!(email = %email, "simulating login");

    Ok(warp::reply::with_status(
        warp::reply::json(&LoginResponse {
            success: true,
            message: "Simulated login successful.".to_string(),
        }),
        StatusCode::OK,
    ))
}
