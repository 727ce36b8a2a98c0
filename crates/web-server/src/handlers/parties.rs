use crate::envelope::{DataEnvelope, DeletedEnvelope};
use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use core_types::Party;
use std::sync::Arc;

/// # GET /parties
pub async fn list_parties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<Vec<Party>>>, AppError> {
    let parties = state
        .db_repo
        .parties
        .list_all()
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(DataEnvelope::success(parties)))
}

/// # GET /party/:id
pub async fn get_party(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataEnvelope<Party>>, AppError> {
    let Path(id) = path?;
    let party = state
        .db_repo
        .parties
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("party {id} not found")))?;
    Ok(Json(DataEnvelope::success(party)))
}

/// # DELETE /party/:id
/// Candidates of the deleted party become unaffiliated.
pub async fn delete_party(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedEnvelope>, AppError> {
    let Path(id) = path?;
    let outcome = state.db_repo.parties.delete_by_id(id).await?;
    Ok(Json(DeletedEnvelope::new("successfully deleted", outcome)))
}
