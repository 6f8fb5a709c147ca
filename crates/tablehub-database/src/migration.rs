//! Schema migrations embedded from the workspace `migrations/` directory.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use tablehub_core::error::{AppError, ErrorKind};

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// One embedded migration and whether the database has applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(embedded = MIGRATOR.iter().count(), "Running database migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}

/// Compare the embedded migrations with the ones recorded in the database.
pub async fn migration_status(pool: &PgPool) -> Result<Vec<MigrationStatus>, AppError> {
    let db_err = |e: sqlx::Error| {
        AppError::with_source(ErrorKind::Database, "Failed to read migration history", e)
    };

    let tracked: bool =
        sqlx::query_scalar("SELECT to_regclass('public._sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await
            .map_err(db_err)?;

    let applied: Vec<i64> = if tracked {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
            .fetch_all(pool)
            .await
            .map_err(db_err)?
    } else {
        Vec::new()
    };

    Ok(merge_status(
        MIGRATOR
            .iter()
            .filter(|m| !m.migration_type.is_down_migration())
            .map(|m| (m.version, m.description.as_ref())),
        &applied,
    ))
}

fn merge_status<'a>(
    embedded: impl Iterator<Item = (i64, &'a str)>,
    applied: &[i64],
) -> Vec<MigrationStatus> {
    embedded
        .map(|(version, description)| MigrationStatus {
            version,
            description: description.to_string(),
            applied: applied.contains(&version),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_status_marks_applied_versions() {
        let embedded = [
            (20250101000001, "create bookings"),
            (20250101000002, "create booking settings"),
        ];
        let status = merge_status(embedded.into_iter(), &[20250101000001]);
        assert!(status[0].applied);
        assert!(!status[1].applied);
        assert_eq!(status[1].description, "create booking settings");
    }

    #[test]
    fn test_embedded_migrations_are_ordered() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert_eq!(versions.len(), 2);
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }
}
