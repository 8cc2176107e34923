// src/models/mod.rs
pub mod api;
pub mod user;
