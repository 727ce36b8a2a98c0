use crate::DbError;
use crate::outcome::{InsertOutcome, WriteOutcome};
use core_types::{NewVoter, Voter, VoterEmailUpdate};
use sqlx::sqlite::SqlitePool;

/// Data access for the `voters` table.
#[derive(Debug, Clone)]
pub struct VoterRepository {
    pool: SqlitePool,
}

impl VoterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetches all voters, sorted by last name.
    pub async fn list_all(&self) -> Result<Vec<Voter>, DbError> {
        let voters = sqlx::query_as::<_, Voter>(
            "SELECT id, first_name, last_name, email, created_at FROM voters ORDER BY last_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(voters)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Voter>, DbError> {
        let voter = sqlx::query_as::<_, Voter>(
            "SELECT id, first_name, last_name, email, created_at FROM voters WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(voter)
    }

    /// Registers a voter. A duplicate email is a `DbError::ConstraintViolation`.
    pub async fn create(&self, voter: &NewVoter) -> Result<InsertOutcome, DbError> {
        let outcome: InsertOutcome =
            sqlx::query("INSERT INTO voters (first_name, last_name, email) VALUES (?, ?, ?)")
                .bind(&voter.first_name)
                .bind(&voter.last_name)
                .bind(&voter.email)
                .execute(&self.pool)
                .await?
                .into();

        tracing::debug!(id = outcome.generated_id, "Created voter.");
        Ok(outcome)
    }

    pub async fn update_email(
        &self,
        id: i64,
        update: &VoterEmailUpdate,
    ) -> Result<WriteOutcome, DbError> {
        let outcome: WriteOutcome = sqlx::query("UPDATE voters SET email = ? WHERE id = ?")
            .bind(&update.email)
            .bind(id)
            .execute(&self.pool)
            .await?
            .into();

        tracing::debug!(id, rows_affected = outcome.rows_affected, "Updated voter email.");
        Ok(outcome)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<WriteOutcome, DbError> {
        let outcome: WriteOutcome = sqlx::query("DELETE FROM voters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .into();

        tracing::debug!(id, rows_affected = outcome.rows_affected, "Deleted voter.");
        Ok(outcome)
    }
}
