use actix_web::HttpServer;
use log::{error, info};
use std::sync::Arc;

use nb_api::{config, create_app, AppSettings, AppState};
use nb_core::domain::entities::resource::ResourceKind;
use nb_core::services::resource::ResourceService;
use nb_core::services::token::{TokenService, TokenServiceConfig};
use nb_infra::{DatabasePool, LocalImageStore, MySqlResourceRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Starting Noteboard API Server ({})", config.environment);

    // Database
    let pool = DatabasePool::new(config.database.clone()).await?;
    pool.run_migrations().await?;
    info!("{}", pool.get_statistics());

    // Image storage
    let store = Arc::new(LocalImageStore::new(config.upload.root.clone()));
    for kind in [ResourceKind::Category, ResourceKind::Note] {
        tokio::fs::create_dir_all(store.root().join(kind.upload_dir())).await?;
    }

    let categories = ResourceService::new(
        ResourceKind::Category,
        Arc::new(MySqlResourceRepository::new(pool.get_pool().clone(), ResourceKind::Category)),
        Arc::clone(&store),
    );
    let notes = ResourceService::new(
        ResourceKind::Note,
        Arc::new(MySqlResourceRepository::new(pool.get_pool().clone(), ResourceKind::Note)),
        Arc::clone(&store),
    );

    if !config.auth.has_secret() {
        log::warn!("JWT_SECRET is not set; using the development secret");
    }
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));

    let state = AppState {
        categories,
        notes,
        token_service,
        settings: AppSettings::from_config(&config),
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone())).bind(&bind_address)?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.run().await?;

    pool.close().await;
    Ok(())
}
