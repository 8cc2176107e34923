// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, status_handlers},
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Rotas de liveness (texto estático)
        .route("/", get(status_handlers::root_status))
        .route("/cadastro", get(status_handlers::cadastro_status))
        // Rotas de mutação (JSON)
        .route("/register", post(auth_handlers::handle_register))
        .route("/login", post(auth_handlers::handle_login))
        .with_state(app_state)
}
