//! Backend entry-point: configuration, pool, seeding, and the HTTP server.

use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use koperasi_backend::outbound::persistence::{DbPool, PoolConfig};
use koperasi_backend::seed::seed_on_startup;
use koperasi_backend::server::{AppConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env(&DefaultEnv::default())
        .map_err(|err| std::io::Error::other(format!("configuration error: {err}")))?;

    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("database pool error: {err}")))?;

    let state = build_http_state(&pool, &config.upload_dir);
    seed_on_startup(
        &config.database_url,
        &config.upload_dir,
        &config.admin_user,
        &config.admin_pass,
        &state,
    )
    .await
    .map_err(|err| std::io::Error::other(format!("startup seeding error: {err}")))?;

    info!(bind_addr = %config.bind_addr, "starting server");
    create_server(config, pool)?.await
}
