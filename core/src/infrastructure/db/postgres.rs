use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::domain::common::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects to the database and applies the embedded migrations.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.url())
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!(host = %config.host, database = %config.name, "database migrations applied");

        Ok(Self {
            db: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
