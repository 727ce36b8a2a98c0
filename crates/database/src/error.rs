use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    /// A foreign key, uniqueness, not-null or check constraint rejected the write.
    #[error("{0}")]
    ConstraintViolation(String),

    /// Any other failure reported by the driver or the store.
    #[error("{0}")]
    StorageError(#[source] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                return DbError::ConstraintViolation(db_err.message().to_string());
            }
        }
        DbError::StorageError(err)
    }
}
