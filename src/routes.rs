// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::config::RelayConfig;
use crate::handlers;

pub fn configure_routes(
    config: Arc<RelayConfig>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let home = warp::path::end()
        .and(warp::get())
        .and_then(handlers::home_handler);

    // GET /ping
    let ping = warp::path("ping")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::ping_handler);

    // POST /login
    let login = warp::path("login")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(handlers::login_handler);

    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_config(config))
        .and_then(handlers::chat_handler);

    // POST /get_history
    let get_history = warp::path("get_history")
        .and(warp::path::end())
        .and(warp::post())
        .and_then(handlers::get_history_handler);

    // Combine routes
    home.or(ping).or(login).or(chat).or(get_history)
}

fn with_config(
    config: Arc<RelayConfig>,
) -> impl Filter<Extract = (Arc<RelayConfig>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}
