use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_me::get_me;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::summarize::summarize;
use super::handlers::update_me::update_me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::summary::ports::SummaryServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub summary_service: Arc<dyn SummaryServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub token_ttl_minutes: i64,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    summary_service: Arc<dyn SummaryServicePort>,
    authenticator: Arc<Authenticator>,
    token_ttl_minutes: i64,
) -> Router {
    let state = AppState {
        user_service,
        summary_service,
        authenticator,
        token_ttl_minutes,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/summaries", post(summarize))
        .route("/summaries/", post(summarize));

    let protected_routes = Router::new()
        .route("/auth/me", get(get_me))
        .route("/auth/me", put(update_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
