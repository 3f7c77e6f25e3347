//! Schema migrations, read from a directory at runtime

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Failed to load migrations from {dir}: {source}")]
    Load {
        dir: String,
        #[source]
        source: MigrateError,
    },

    #[error("Failed to apply migrations: {0}")]
    Apply(#[from] MigrateError),
}

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrationError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await.map_err(|source| MigrationError::Load {
        dir: dir.display().to_string(),
        source,
    })?;

    info!(dir = %dir.display(), count = migrator.iter().count(), "Applying migrations");
    migrator.run(pool).await?;
    Ok(())
}
