// src/services/mod.rs
pub mod auth_service;
pub mod cadastro_service;
