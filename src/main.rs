use guildkeeper::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "Database schema is current"
    );

    db.close().await?;

    Ok(())
}
