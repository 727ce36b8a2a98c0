use crate::DbError;
use crate::outcome::{InsertOutcome, WriteOutcome};
use core_types::{CandidateDetails, CandidatePartyUpdate, NewCandidate};
use sqlx::sqlite::SqlitePool;

/// Data access for the `candidates` table.
#[derive(Debug, Clone)]
pub struct CandidateRepository {
    pool: SqlitePool,
}

impl CandidateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetches every candidate together with its party's name.
    /// Unaffiliated candidates are kept, with a `None` party name.
    pub async fn list_all(&self) -> Result<Vec<CandidateDetails>, DbError> {
        let candidates = sqlx::query_as::<_, CandidateDetails>(
            r#"
            SELECT
                c.id, c.first_name, c.last_name, c.industry_connected, c.party_id,
                p.name AS party_name
            FROM
                candidates AS c
            LEFT JOIN
                parties AS p ON c.party_id = p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    /// Fetches a single candidate with its party's name, or `None` when the id is unknown.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<CandidateDetails>, DbError> {
        let candidate = sqlx::query_as::<_, CandidateDetails>(
            r#"
            SELECT
                c.id, c.first_name, c.last_name, c.industry_connected, c.party_id,
                p.name AS party_name
            FROM
                candidates AS c
            LEFT JOIN
                parties AS p ON c.party_id = p.id
            WHERE
                c.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Registers a new, unaffiliated candidate.
    pub async fn create(&self, candidate: &NewCandidate) -> Result<InsertOutcome, DbError> {
        let outcome: InsertOutcome = sqlx::query(
            "INSERT INTO candidates (first_name, last_name, industry_connected) VALUES (?, ?, ?)",
        )
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(candidate.industry_connected)
        .execute(&self.pool)
        .await?
        .into();

        tracing::debug!(id = outcome.generated_id, "Created candidate.");
        Ok(outcome)
    }

    /// Assigns the candidate to a party, or clears the assignment.
    ///
    /// The party must exist; the foreign key turns an unknown party into a
    /// `DbError::ConstraintViolation`.
    pub async fn update_party(
        &self,
        id: i64,
        update: &CandidatePartyUpdate,
    ) -> Result<WriteOutcome, DbError> {
        let outcome: WriteOutcome = sqlx::query("UPDATE candidates SET party_id = ? WHERE id = ?")
            .bind(update.party_id)
            .bind(id)
            .execute(&self.pool)
            .await?
            .into();

        tracing::debug!(id, rows_affected = outcome.rows_affected, "Updated candidate party.");
        Ok(outcome)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<WriteOutcome, DbError> {
        let outcome: WriteOutcome = sqlx::query("DELETE FROM candidates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .into();

        tracing::debug!(id, rows_affected = outcome.rows_affected, "Deleted candidate.");
        Ok(outcome)
    }
}
