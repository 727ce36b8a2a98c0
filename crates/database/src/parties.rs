use crate::DbError;
use crate::outcome::WriteOutcome;
use core_types::Party;
use sqlx::sqlite::SqlitePool;

/// Data access for the `parties` table. Parties are seeded reference data,
/// so there is no insert or update here.
#[derive(Debug, Clone)]
pub struct PartyRepository {
    pool: SqlitePool,
}

impl PartyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Party>, DbError> {
        let parties = sqlx::query_as::<_, Party>("SELECT id, name, description FROM parties")
            .fetch_all(&self.pool)
            .await?;
        Ok(parties)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Party>, DbError> {
        let party =
            sqlx::query_as::<_, Party>("SELECT id, name, description FROM parties WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(party)
    }

    /// Removes a party. Its candidates stay, with their `party_id` cleared
    /// by the `ON DELETE SET NULL` foreign key.
    pub async fn delete_by_id(&self, id: i64) -> Result<WriteOutcome, DbError> {
        let outcome: WriteOutcome = sqlx::query("DELETE FROM parties WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .into();

        tracing::debug!(id, rows_affected = outcome.rows_affected, "Deleted party.");
        Ok(outcome)
    }
}
