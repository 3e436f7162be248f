//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use hostel_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controla o nível; sem ela, "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let db_pool = config.connect_pool().await?;

    sqlx::migrate!()
        .run(&db_pool)
        .await?;

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app_state = AppState::load(db_pool, &config).await?;
    app_state.bootstrap_admin(&config).await?;

    let app = create_app(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    tracing::info!("📖 Documentação disponível em /swagger-ui");

    axum::serve(listener, app).await?;

    Ok(())
}
