use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Constraint violations are the only expected failure mode of this layer;
/// each kind the storage engine can raise gets its own variant so callers
/// can match on them.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("not-null constraint violated: {0}")]
    NotNullViolation(String),

    #[error("record not found: {0}")]
    RecordNotFound(String),

    #[error("unsupported database backend: {0}")]
    UnsupportedBackend(String),

    #[error("database error")]
    Other(#[source] DbErr),
}

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => classify(err),
        }
    }
}

// `SqlErr` misses two kinds that have to be picked out of the driver
// message instead: not-null violations on both backends (SQLite prints
// "NOT NULL constraint failed", PostgreSQL uses SQLSTATE 23502), and
// RESTRICT-delete violations on SQLite, which arrive with extended code
// 1811 and are not mapped to `ForeignKeyConstraintViolation`.
fn classify(err: DbErr) -> DbError {
    match err {
        DbErr::RecordNotFound(msg) => return DbError::RecordNotFound(msg),
        DbErr::RecordNotUpdated => {
            return DbError::RecordNotFound("no rows matched the update".to_owned())
        }
        _ => {}
    }
    let msg = err.to_string();
    if msg.contains("NOT NULL constraint failed")
        || msg.contains("null value in column")
        || msg.contains("23502")
    {
        return DbError::NotNullViolation(msg);
    }
    if msg.contains("FOREIGN KEY constraint failed")
        || msg.contains("violates foreign key constraint")
        || msg.contains("23503")
    {
        return DbError::ForeignKeyViolation(msg);
    }
    DbError::Other(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_violation_is_classified_from_the_driver_message() {
        let err = DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "NOT NULL constraint failed: scores.total_scored".to_owned(),
        ));
        assert!(matches!(DbError::from(err), DbError::NotNullViolation(_)));
    }

    #[test]
    fn restricted_delete_is_a_foreign_key_violation() {
        // SQLite reports RESTRICT violations outside the codes SqlErr maps.
        let err = DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "FOREIGN KEY constraint failed".to_owned(),
        ));
        assert!(matches!(DbError::from(err), DbError::ForeignKeyViolation(_)));

        let err = DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "update or delete on table \"user\" violates foreign key constraint".to_owned(),
        ));
        assert!(matches!(DbError::from(err), DbError::ForeignKeyViolation(_)));
    }

    #[test]
    fn update_touching_no_rows_is_not_found() {
        assert!(matches!(
            DbError::from(DbErr::RecordNotUpdated),
            DbError::RecordNotFound(_)
        ));
    }

    #[test]
    fn record_not_found_is_preserved() {
        let err = DbErr::RecordNotFound("subject 7".to_owned());
        assert!(matches!(DbError::from(err), DbError::RecordNotFound(_)));
    }

    #[test]
    fn unrelated_errors_stay_opaque() {
        let err = DbErr::Custom("boom".to_owned());
        assert!(matches!(DbError::from(err), DbError::Other(_)));
    }
}
