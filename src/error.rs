// src/error.rs
use crate::models::api::ApiResponse;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    // Campos obrigatórios ausentes ou inválidos; a mensagem vai para o cliente
    #[error("{0}")]
    Validation(String),

    #[error("Usuário já existe!")]
    UsuarioJaExiste,

    #[error("Usuário não encontrado!")]
    UsuarioNaoEncontrado,

    #[error("Senha incorreta!")]
    SenhaIncorreta,

    #[error("Erro ao processar password")]
    PasswordHashingError,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor; o cliente só vê a mensagem genérica
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UsuarioJaExiste => {
                (StatusCode::BAD_REQUEST, "Usuário já existe!".to_string())
            }
            AppError::UsuarioNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado!".to_string())
            }
            AppError::SenhaIncorreta => (StatusCode::UNAUTHORIZED, "Senha incorreta!".to_string()),
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro interno do servidor ao salvar dados.".to_string(),
            ),
            AppError::PasswordHashingError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao processar credenciais.".to_string(),
            ),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro interno do servidor.".to_string(),
            ),
        };

        (status, Json(ApiResponse::erro(user_message))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
