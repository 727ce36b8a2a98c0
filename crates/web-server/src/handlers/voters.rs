use super::{Fields, checked};
use crate::envelope::{CreatedEnvelope, DataEnvelope, DeletedEnvelope, UpdatedEnvelope};
use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use core_types::{NewVoter, Voter, VoterEmailUpdate};
use std::sync::Arc;

/// # GET /voters
/// All voters, ordered by last name.
pub async fn list_voters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<Vec<Voter>>>, AppError> {
    let voters = state
        .db_repo
        .voters
        .list_all()
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(DataEnvelope::success(voters)))
}

/// # GET /voter/:id
pub async fn get_voter(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataEnvelope<Voter>>, AppError> {
    let Path(id) = path?;
    let voter = state
        .db_repo
        .voters
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("voter {id} not found")))?;
    Ok(Json(DataEnvelope::success(voter)))
}

/// # POST /voter
pub async fn create_voter(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<CreatedEnvelope<Fields>>, AppError> {
    let Json(body) = body?;
    let voter: NewVoter = checked(&body, NewVoter::REQUIRED)?;
    let outcome = state.db_repo.voters.create(&voter).await?;
    tracing::info!(id = outcome.generated_id, "Voter registered.");
    Ok(Json(CreatedEnvelope::new(body, outcome)))
}

/// # PUT /voter/:id
/// Only the email address can be changed.
pub async fn update_voter(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<UpdatedEnvelope<Fields>>, AppError> {
    let Path(id) = path?;
    let Json(body) = body?;
    let update: VoterEmailUpdate = checked(&body, VoterEmailUpdate::REQUIRED)?;
    let outcome = state.db_repo.voters.update_email(id, &update).await?;
    Ok(Json(UpdatedEnvelope::new(body, outcome)))
}

/// # DELETE /voter/:id
pub async fn delete_voter(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedEnvelope>, AppError> {
    let Path(id) = path?;
    let outcome = state.db_repo.voters.delete_by_id(id).await?;
    Ok(Json(DeletedEnvelope::new("deleted", outcome)))
}
