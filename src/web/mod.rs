// src/web/mod.rs
pub mod auth_handlers;
pub mod routes;
pub mod status_handlers;
