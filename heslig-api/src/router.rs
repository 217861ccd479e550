use axum::{http::Method, middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    app_state::AppState,
    config::Environment,
    rate_limit::{self, RateLimiter},
    routes,
};

pub fn create(environment: Environment, app_state: AppState) -> Router {
    let router = Router::new()
        .nest("/search", routes::search::router())
        .nest("/stats", routes::stats::router())
        .nest("/monitor", routes::monitor::router())
        .with_state(app_state);

    // The browser client is served from another origin during development.
    let router = if environment != Environment::Production {
        router.layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    // The limiter sits outside CORS; throttled responses carry no CORS headers.
    router
        .layer(middleware::from_fn_with_state(
            RateLimiter::new(),
            rate_limit::throttle,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
