use crate::dtos::{CreatePersonRequest, PersonResponse};
use crate::models::Person;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PersonQuery {
    #[serde(default)]
    pub id: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    // Decode by hand so shape errors report 400 like syntax errors, instead of
    // the extractor's 422
    let request: CreatePersonRequest = serde_json::from_value(payload)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("invalid person payload: {}", e)))?;

    if request.id.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "id must not be empty"
        )));
    }

    let person = Person::from(request);

    state.db.insert(&person).await?;

    metrics::counter!("people_created_total").increment(1);

    tracing::info!(person_id = %person.id, "Person created");

    Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

/// Returns the person with the given id.
///
/// An unknown (or empty) id is not an error: the reply is an empty record,
/// serialized as `{}`. A stored record always carries a non-empty id, so the
/// two cases stay distinguishable on the wire.
#[tracing::instrument(skip(state))]
pub async fn get_person(
    State(state): State<AppState>,
    Query(query): Query<PersonQuery>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state.db.find_by_id(&query.id).await?;

    Ok(Json(person.map(PersonResponse::from).unwrap_or_default()))
}

#[tracing::instrument(skip(state))]
pub async fn remove_person(
    State(state): State<AppState>,
    Query(query): Query<PersonQuery>,
) -> Result<&'static str, AppError> {
    let deleted = state.db.delete_by_id(&query.id).await?;

    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "no person with id {}",
            query.id
        )));
    }

    metrics::counter!("people_deleted_total").increment(1);

    tracing::info!(person_id = %query.id, "Person deleted");

    Ok("Deleted")
}
