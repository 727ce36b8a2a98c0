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
use core_types::{CandidateDetails, CandidatePartyUpdate, NewCandidate};
use std::sync::Arc;

/// # GET /candidates
/// Every candidate with its party's name.
pub async fn list_candidates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<Vec<CandidateDetails>>>, AppError> {
    let candidates = state
        .db_repo
        .candidates
        .list_all()
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(DataEnvelope::success(candidates)))
}

/// # GET /candidate/:id
pub async fn get_candidate(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataEnvelope<CandidateDetails>>, AppError> {
    let Path(id) = path?;
    let candidate = state
        .db_repo
        .candidates
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("candidate {id} not found")))?;
    Ok(Json(DataEnvelope::success(candidate)))
}

/// # POST /candidate
pub async fn create_candidate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<CreatedEnvelope<Fields>>, AppError> {
    let Json(body) = body?;
    let candidate: NewCandidate = checked(&body, NewCandidate::REQUIRED)?;
    let outcome = state.db_repo.candidates.create(&candidate).await?;
    tracing::info!(id = outcome.generated_id, "Candidate registered.");
    Ok(Json(CreatedEnvelope::new(body, outcome)))
}

/// # PUT /candidate/:id
/// Changes the candidate's party. `changes` is 0 when the id is unknown.
pub async fn update_candidate(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<UpdatedEnvelope<Fields>>, AppError> {
    let Path(id) = path?;
    let Json(body) = body?;
    let update: CandidatePartyUpdate = checked(&body, CandidatePartyUpdate::REQUIRED)?;
    let outcome = state.db_repo.candidates.update_party(id, &update).await?;
    Ok(Json(UpdatedEnvelope::new(body, outcome)))
}

/// # DELETE /candidate/:id
pub async fn delete_candidate(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedEnvelope>, AppError> {
    let Path(id) = path?;
    let outcome = state.db_repo.candidates.delete_by_id(id).await?;
    Ok(Json(DeletedEnvelope::new("successfully deleted", outcome)))
}
