// src/services/cadastro_service.rs
//
// Storage Gateway: o único componente que fala com a tabela 'cadastro'.
use crate::{
    error::{AppError, AppResult},
    models::user::UserRecord,
};
use sqlx::SqlitePool;

/// Busca um registo completo pelo username.
pub async fn find_by_username(
    db_pool: &SqlitePool,
    username: &str,
) -> AppResult<Option<UserRecord>> {
    tracing::debug!("Buscando cadastro por username: {}", username);
    let record = sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, nome, sobrenome, endereco, profissao, username, password
        FROM cadastro
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(db_pool)
    .await?;

    if record.is_some() {
        tracing::debug!("Username '{}' encontrado.", username);
    } else {
        tracing::debug!("Username '{}' não encontrado.", username);
    }
    Ok(record)
}

/// Verifica se já existe um registo com este username.
pub async fn exists_by_username(db_pool: &SqlitePool, username: &str) -> AppResult<bool> {
    let existing = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM cadastro WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(db_pool)
    .await?;
    Ok(existing.is_some())
}

/// Insere um novo registo e devolve o id gerado.
/// A violação da constraint UNIQUE em username vira AppError::UsuarioJaExiste,
/// mesmo quando dois registros idênticos chegam em simultâneo.
pub async fn insert(
    db_pool: &SqlitePool,
    nome: &str,
    sobrenome: Option<&str>,
    endereco: Option<&str>,
    profissao: Option<&str>,
    username: &str,
    password_hash: &str,
) -> AppResult<i64> {
    tracing::debug!("Inserindo cadastro para username: {}", username);
    let result = sqlx::query(
        r#"
        INSERT INTO cadastro (nome, sobrenome, endereco, profissao, username, password)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(nome)
    .bind(sobrenome)
    .bind(endereco)
    .bind(profissao)
    .bind(username)
    .bind(password_hash)
    .execute(db_pool)
    .await;

    match result {
        Ok(done) => Ok(done.last_insert_rowid()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Falha ao inserir: username '{}' já existe.", username);
            Err(AppError::UsuarioJaExiste)
        }
        Err(e) => Err(e.into()),
    }
}
