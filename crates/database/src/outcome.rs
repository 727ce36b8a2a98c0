use sqlx::sqlite::SqliteQueryResult;

/// The result of a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// The identifier the store assigned to the new row.
    pub generated_id: i64,
}

/// The result of an update or delete.
///
/// Zero rows is not a failure; it is how callers learn that no row had the
/// requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub rows_affected: u64,
}

impl From<SqliteQueryResult> for InsertOutcome {
    fn from(result: SqliteQueryResult) -> Self {
        Self {
            generated_id: result.last_insert_rowid(),
        }
    }
}

impl From<SqliteQueryResult> for WriteOutcome {
    fn from(result: SqliteQueryResult) -> Self {
        Self {
            rows_affected: result.rows_affected(),
        }
    }
}
