use sea_orm::{ConnectionTrait, DbConn};

use crate::error::DbError;

/// Creates all quizmaster tables on the connected backend. The DDL is the
/// compatibility surface of this crate: table and column names, nullability,
/// uniqueness, and per-relationship delete policies all live here.
pub async fn setup(db: &DbConn) -> Result<(), DbError> {
    let ddl = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => include_str!("schema/postgres.sql"),
        sea_orm::DatabaseBackend::Sqlite => include_str!("schema/sqlite.sql"),
        other => return Err(DbError::UnsupportedBackend(format!("{other:?}"))),
    };

    tracing::debug!(backend = ?db.get_database_backend(), "creating schema");
    db.execute_unprepared(ddl).await?;
    Ok(())
}
