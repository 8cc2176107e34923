// src/web/status_handlers.rs
//
// Rotas de liveness: texto estático, sem estado, confirmam que o processo vive.

// GET /
pub async fn root_status() -> &'static str {
    "API cadastro-api rodando na rota raiz (/) ✅"
}

// GET /cadastro
pub async fn cadastro_status() -> &'static str {
    "API cadastro-api rodando na rota de cadastro (GET) ✅"
}
