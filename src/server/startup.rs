use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured log level is used as the
/// filter directive.
///
/// # Arguments
/// - `config` - Application configuration containing the default log level
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::InternalError)` - A global subscriber was already set
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::InternalError(format!("Failed to install tracing subscriber: {}", e)))
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. SQLite and Postgres
/// URLs are both accepted. This function must complete successfully before any service
/// can open a unit of work.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Applied pending migrations");

    Ok(db)
}
