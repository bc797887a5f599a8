use axum::{
    Router, middleware,
    routing::{any, get},
};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::{
    run::AppState,
    web::{
        handler::{health_live_handler, not_found_handler},
        login::{login_handler, post_login_handler},
        middleware::response_mapper,
    },
};

pub fn all_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", get(login_handler).post(post_login_handler))
        .route("/health/liveness", get(health_live_handler))
        .fallback(any(not_found_handler))
        .layer(middleware::map_response(response_mapper))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
