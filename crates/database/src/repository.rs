use crate::{CandidateRepository, PartyRepository, VoterRepository};
use sqlx::sqlite::SqlitePool;

/// The `DbRepository` bundles the per-resource repositories around one
/// shared connection pool. Cloning it is cheap; every clone uses the same pool.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pub candidates: CandidateRepository,
    pub voters: VoterRepository,
    pub parties: PartyRepository,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            candidates: CandidateRepository::new(pool.clone()),
            voters: VoterRepository::new(pool.clone()),
            parties: PartyRepository::new(pool),
        }
    }
}
