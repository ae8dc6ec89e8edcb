use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use std::sync::Arc;

use messhall::auth::handlers::bootstrap_admin;
use messhall::config::{Config, StoreBackend};
use messhall::db::init_db;
use messhall::docs::ApiDoc;
use messhall::routes;
use messhall::store::{MemoryStore, MessStore, MySqlStore};

use tracing::{info, warn};
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(backend = %config.store_backend, "Server starting...");

    // Store handle: opened here, closed after the server stops.
    let (store, pool) = match config.store_backend {
        StoreBackend::Mysql => {
            let url = config.database_url.as_deref().unwrap_or_default();
            let pool = init_db(url, config.db_max_connections).await?;
            let store: Arc<dyn MessStore> = Arc::new(MySqlStore::new(pool.clone()));
            (store, Some(pool))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            let store: Arc<dyn MessStore> = Arc::new(MemoryStore::new());
            (store, None)
        }
    };

    if let Some(seed) = &config.admin_seed {
        bootstrap_admin(store.as_ref(), &seed.name, &seed.email, &seed.password).await?;
    }

    let server_addr = config.server_addr.clone();
    let store_data: Data<dyn MessStore> = Data::from(store);
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store_data.clone())
            .app_data(Data::new(config.clone()))
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(&server_addr)?
    .run()
    .await?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    info!("Server stopped");
    Ok(())
}
