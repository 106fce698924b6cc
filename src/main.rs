//! DocHub Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use dochub_core::config::AppConfig;
use dochub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DOCHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Repository set for a selected storage backend.
struct Repositories {
    file_repo: Arc<dyn dochub_database::repositories::FileRepository>,
    user_repo: Arc<dyn dochub_database::repositories::UserRepository>,
    edit_repo: Arc<dyn dochub_database::repositories::EditRepository>,
    notification_repo: Arc<dyn dochub_database::repositories::NotificationRepository>,
}

/// Build repositories for the configured backend. The postgres backend
/// connects a pool and runs migrations; the memory backend holds all
/// state in-process and loses it on restart.
async fn build_repositories(config: &AppConfig) -> Result<Repositories, AppError> {
    match config.database.backend.as_str() {
        "memory" => {
            tracing::warn!("Using in-memory storage backend; data will not survive a restart");
            Ok(Repositories {
                file_repo: Arc::new(dochub_database::memory::MemoryFileRepository::new()),
                user_repo: Arc::new(dochub_database::memory::MemoryUserRepository::new()),
                edit_repo: Arc::new(dochub_database::memory::MemoryEditRepository::new()),
                notification_repo: Arc::new(
                    dochub_database::memory::MemoryNotificationRepository::new(),
                ),
            })
        }
        "postgres" => {
            tracing::info!("Connecting to database...");
            let db_pool = dochub_database::connection::create_pool(&config.database).await?;

            tracing::info!("Running database migrations...");
            dochub_database::migration::run_migrations(&db_pool).await?;
            tracing::info!("Database migrations complete");

            Ok(Repositories {
                file_repo: Arc::new(dochub_database::repositories::file::PgFileRepository::new(
                    db_pool.clone(),
                )),
                user_repo: Arc::new(dochub_database::repositories::user::PgUserRepository::new(
                    db_pool.clone(),
                )),
                edit_repo: Arc::new(dochub_database::repositories::edit::PgEditRepository::new(
                    db_pool.clone(),
                )),
                notification_repo: Arc::new(
                    dochub_database::repositories::notification::PgNotificationRepository::new(
                        db_pool,
                    ),
                ),
            })
        }
        other => Err(AppError::configuration(format!(
            "Unknown database backend '{}'; expected 'postgres' or 'memory'",
            other
        ))),
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DocHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Storage backend ──────────────────────────────────
    let repos = build_repositories(&config).await?;

    // ── Step 2: Auth system ──────────────────────────────────────
    let jwt_decoder = Arc::new(dochub_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let enforcer = Arc::new(dochub_auth::rbac::enforcer::PolicyEnforcer::new());

    // ── Step 3: Services ─────────────────────────────────────────
    let file_service = Arc::new(dochub_service::file::FileService::new(
        Arc::clone(&repos.file_repo),
        Arc::clone(&repos.user_repo),
        Arc::clone(&repos.edit_repo),
        Arc::clone(&repos.notification_repo),
        enforcer,
    ));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app_state = dochub_api::state::AppState {
        config: Arc::new(config.clone()),
        jwt_decoder,
        file_service,
    };

    let app = dochub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("DocHub server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("DocHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
