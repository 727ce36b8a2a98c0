use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `candidates` table joined with the name of its party.
///
/// Produced by a left outer join, so `party_name` is `None` whenever the
/// candidate has no party.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CandidateDetails {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: bool,
    /// `None` for an unaffiliated candidate.
    pub party_id: Option<i64>,
    pub party_name: Option<String>,
}

/// A row from the `voters` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Voter {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A row from the `parties` table. Parties are reference data.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
