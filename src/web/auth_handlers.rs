// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        api::ApiResponse,
        user::{LoginForm, RegisterForm},
    },
    services::{auth_service, cadastro_service},
    state::AppState,
};
use axum::extract::{Json, State};

// Campo obrigatório: presente e não vazio (string vazia conta como ausente)
fn campo_obrigatorio(valor: &Option<String>) -> Option<&str> {
    valor.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> AppResult<Json<ApiResponse>> {
    tracing::info!(
        "📝 Tentativa de registro para username: {:?}",
        form.username
    );

    // 1. Validação de presença: nome, username e password são obrigatórios
    let (nome, username, password) = match (
        campo_obrigatorio(&form.nome),
        campo_obrigatorio(&form.username),
        campo_obrigatorio(&form.password),
    ) {
        (Some(n), Some(u), Some(p)) => (n, u, p),
        _ => {
            return Err(AppError::Validation(
                "Nome, usuário e senha são obrigatórios!".to_string(),
            ))
        }
    };

    // 2. Comprimento mínimo da senha
    if password.chars().count() < 6 {
        return Err(AppError::Validation(
            "A senha deve ter pelo menos 6 caracteres!".to_string(),
        ));
    }

    // 3. Verificação amigável de duplicado (a constraint UNIQUE é a guarda final)
    if cadastro_service::exists_by_username(&state.db_pool, username).await? {
        return Err(AppError::UsuarioJaExiste);
    }

    // 4. Hash da senha antes de persistir
    let password_hash = auth_service::hash_password(password).await?;

    // 5. Insere o registo; duplicado concorrente vira UsuarioJaExiste aqui
    let id = cadastro_service::insert(
        &state.db_pool,
        nome,
        form.sobrenome.as_deref(),
        form.endereco.as_deref(),
        form.profissao.as_deref(),
        username,
        &password_hash,
    )
    .await?;

    tracing::info!("✅ Usuário cadastrado com ID: {}", id);
    Ok(Json(ApiResponse::sucesso("Cadastro realizado com sucesso!")))
}

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> AppResult<Json<ApiResponse>> {
    tracing::info!("🔐 Tentativa de login para username: {:?}", form.username);

    let (username, password) = match (
        campo_obrigatorio(&form.username),
        campo_obrigatorio(&form.password),
    ) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            return Err(AppError::Validation(
                "Preencha username e password!".to_string(),
            ))
        }
    };

    // 1. Busca o registo pelo username
    let record = cadastro_service::find_by_username(&state.db_pool, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Usuário não encontrado: {}", username);
            AppError::UsuarioNaoEncontrado
        })?;

    // 2. Comparação via bcrypt (nunca comparação direta de senha)
    if !auth_service::verify_password(password, &record.password_hash).await? {
        tracing::warn!("Senha incorreta para username: {}", username);
        return Err(AppError::SenhaIncorreta);
    }

    tracing::info!("✅ Login bem-sucedido para: {}", username);
    Ok(Json(ApiResponse::sucesso(format!(
        "Login bem-sucedido! Bem-vindo, {}!",
        record.nome
    ))))
}
