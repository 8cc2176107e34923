// src/models/user.rs
use serde::Deserialize;
use sqlx::FromRow;

// Representa um registo lido da tabela 'cadastro'
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub nome: String,
    pub sobrenome: Option<String>,
    pub endereco: Option<String>,
    pub profissao: Option<String>,
    pub username: String,
    // A coluna chama-se 'password' mas guarda o hash bcrypt
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

// Dados do formulário de registro.
// Os campos obrigatórios são Option para a validação de presença devolver 400
// com mensagem própria, em vez da rejeição automática do extractor.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub endereco: Option<String>,
    pub profissao: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

// Dados do formulário de login
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}
