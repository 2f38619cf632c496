use std::sync::Arc;

use doorman::{
    app,
    auth::repo::{PgUserStore, UserStore},
    config::AppConfig,
    state::AppState,
    views::Views,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "doorman=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let views = Views::load(&config.http.templates_dir)?;

    let store = PgUserStore::connect(&config.database_url, config.db_max_connections).await?;
    store.migrate().await?;

    let users: Arc<dyn UserStore> = Arc::new(store.clone());
    let app = app::build_app(AppState::from_parts(users, views), &config.http.static_dir);

    let served = app::serve(app, &config.bind_addr()).await;
    store.close().await;
    served
}
