use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Redirect,
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::database::ActivityStore;
use crate::models::Catalog;
use crate::services::activities_service;
use crate::web::error::ApiError;

pub const FRONTEND_ENTRY: &str = "/static/index.html";

/// Query parameters of the signup and removal endpoints.
///
/// Read from the raw pair list so a repeated `email` is not a client error;
/// the last occurrence wins.
#[derive(Debug, Default)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    // Only an absent parameter is refused; a blank value is passed through.
    fn require_email(self) -> Result<String, ApiError> {
        self.email
            .ok_or(ApiError::MissingParameter { field: "email" })
    }
}

fn participant_request(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<(String, String), ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = ParticipantQuery::from_pairs(pairs).require_email()?;
    Ok((activity_name, email))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn root_handler() -> Redirect {
    Redirect::temporary(FRONTEND_ENTRY)
}

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<Catalog> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, email) = participant_request(path, query)?;

    let message = activities_service::signup_for_activity(&store, &activity_name, &email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "signup refused: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse { message }))
}

pub async fn remove_participant_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, email) = participant_request(path, query)?;

    let message = activities_service::remove_participant(&store, &activity_name, &email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "removal refused: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse { message }))
}
