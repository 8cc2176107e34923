// Testes do Storage Gateway direto no pool, sem passar pelo HTTP.
use cadastro_api::{
    db,
    error::AppError,
    services::{auth_service, cadastro_service},
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Falha ao criar pool em memória");
    db::run_migrations(&pool)
        .await
        .expect("Falha ao migrar DB de teste");
    pool
}

#[tokio::test]
async fn insert_devolve_id_gerado_e_exists_passa_a_ver_o_registro() {
    let pool = test_pool().await;

    assert!(!cadastro_service::exists_by_username(&pool, "joao1")
        .await
        .expect("exists falhou"));

    let id = cadastro_service::insert(
        &pool,
        "João",
        Some("Souza"),
        None,
        Some("Padeiro"),
        "joao1",
        "$2b$12$hash-irrelevante-para-este-teste",
    )
    .await
    .expect("insert falhou");
    assert!(id > 0);

    assert!(cadastro_service::exists_by_username(&pool, "joao1")
        .await
        .expect("exists falhou"));
}

#[tokio::test]
async fn find_by_username_devolve_o_registro_completo() {
    let pool = test_pool().await;

    let hash = auth_service::hash_password("abcdef")
        .await
        .expect("hash falhou");
    cadastro_service::insert(&pool, "Maria", None, None, None, "maria1", &hash)
        .await
        .expect("insert falhou");

    let registro = cadastro_service::find_by_username(&pool, "maria1")
        .await
        .expect("find falhou")
        .expect("registro ausente");
    assert_eq!(registro.nome, "Maria");
    assert_eq!(registro.username, "maria1");
    assert_eq!(registro.sobrenome, None);
    assert!(auth_service::verify_password("abcdef", &registro.password_hash)
        .await
        .expect("verify falhou"));

    let ausente = cadastro_service::find_by_username(&pool, "ninguem")
        .await
        .expect("find falhou");
    assert!(ausente.is_none());
}

#[tokio::test]
async fn insert_duplicado_vira_erro_de_usuario_ja_existe() {
    let pool = test_pool().await;

    cadastro_service::insert(&pool, "Ana", None, None, None, "ana1", "hash-a")
        .await
        .expect("primeiro insert falhou");

    // Mesmo username, sem pre-check: a constraint UNIQUE responde
    let erro = cadastro_service::insert(&pool, "Outra", None, None, None, "ana1", "hash-b")
        .await
        .expect_err("segundo insert deveria falhar");
    assert!(matches!(erro, AppError::UsuarioJaExiste), "erro: {erro:?}");
}

#[tokio::test]
async fn hash_e_verify_de_senha() {
    let hash = auth_service::hash_password("segredo9")
        .await
        .expect("hash falhou");
    assert_ne!(hash, "segredo9");

    assert!(auth_service::verify_password("segredo9", &hash)
        .await
        .expect("verify falhou"));
    // Comparação é byte-exata e sensível a maiúsculas
    assert!(!auth_service::verify_password("Segredo9", &hash)
        .await
        .expect("verify falhou"));
}
