// src/lib.rs
// Raiz da biblioteca: expõe os módulos para o binário e para os testes de integração.

pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
