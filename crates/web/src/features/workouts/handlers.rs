use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    athlete::AthleteResponse,
    common::{AthleteNamePath, ErrorResponse},
    workout::{AddWorkoutRequest, WorkoutResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/athletes/{first_name}/{last_name}/workouts",
    params(AthleteNamePath),
    request_body = AddWorkoutRequest,
    responses(
        (status = 201, description = "Workout recorded", body = WorkoutResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Athlete not found", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn add_workout(
    State(state): State<AppState>,
    path: Result<Path<AthleteNamePath>, PathRejection>,
    payload: Result<Json<AddWorkoutRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Path(name) = path?;
    let Json(req) = payload?;

    req.validate()?;

    let (athlete, workout) = services::add_workout(
        state.store.as_ref(),
        &name.first_name,
        &name.last_name,
        (&req).into(),
    )
    .await?;

    let response = WorkoutResponse {
        athlete: AthleteResponse::from(athlete),
        workout,
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{first_name}/{last_name}/workouts",
    params(AthleteNamePath),
    responses(
        (status = 200, description = "Workout history cleared", body = AthleteResponse),
        (status = 404, description = "Athlete not found", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn reset_workouts(
    State(state): State<AppState>,
    path: Result<Path<AthleteNamePath>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(name) = path?;
    let athlete =
        services::reset_workouts(state.store.as_ref(), &name.first_name, &name.last_name)
            .await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}
