use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        athlete::{AthleteResponse, CreateAthleteRequest, UpdateLiftsRequest},
        common::{AthleteNamePath, DeletedResponse, ErrorResponse},
    },
    models::{Athlete, Lift},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

fn to_response(athletes: Vec<Athlete>) -> Json<Vec<AthleteResponse>> {
    Json(athletes.into_iter().map(AthleteResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "List all athletes successfully", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(state): State<AppState>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(state.store.as_ref()).await?;

    Ok(to_response(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{first_name}/{last_name}",
    params(AthleteNamePath),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found", body = ErrorResponse)
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    path: Result<Path<AthleteNamePath>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(name) = path?;
    let athlete =
        services::get_athlete(state.store.as_ref(), &name.first_name, &name.last_name).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "An athlete with this name already exists", body = ErrorResponse)
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    payload: Result<Json<CreateAthleteRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;

    req.validate()?;

    let athlete = services::create_athlete(state.store.as_ref(), state.gender_policy, &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{first_name}/{last_name}/lifts",
    params(AthleteNamePath),
    request_body = UpdateLiftsRequest,
    responses(
        (status = 200, description = "Lifts updated and total recomputed", body = AthleteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Athlete not found", body = ErrorResponse)
    ),
    tag = "athletes"
)]
pub async fn update_lifts(
    State(state): State<AppState>,
    path: Result<Path<AthleteNamePath>, PathRejection>,
    payload: Result<Json<UpdateLiftsRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Path(name) = path?;
    let Json(update_req) = payload?;

    update_req.validate()?;

    let updated = services::update_lifts(
        state.store.as_ref(),
        &name.first_name,
        &name.last_name,
        &update_req,
    )
    .await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{first_name}/{last_name}",
    params(AthleteNamePath),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found", body = ErrorResponse)
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    path: Result<Path<AthleteNamePath>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(name) = path?;
    services::delete_athlete(state.store.as_ref(), &name.first_name, &name.last_name).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes",
    responses(
        (status = 200, description = "All athletes deleted", body = DeletedResponse)
    ),
    tag = "athletes"
)]
pub async fn delete_all_athletes(State(state): State<AppState>) -> Result<Response, WebError> {
    let deleted = services::delete_all_athletes(state.store.as_ref()).await?;

    Ok(Json(DeletedResponse { deleted }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/weight-classes/{weight_class}",
    params(
        ("weight_class" = String, Path, description = "Weight class label, e.g. `74kg` or `120kg+`")
    ),
    responses(
        (status = 200, description = "Athletes in the weight class", body = Vec<AthleteResponse>),
        (status = 400, description = "Unrecognized weight class", body = ErrorResponse)
    ),
    tag = "queries"
)]
pub async fn list_by_weight_class(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(label) = path?;
    let athletes = services::list_by_weight_class(state.store.as_ref(), &label).await?;

    Ok(to_response(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/lifts/{lift}/minimum/{minimum}",
    params(
        ("lift" = String, Path, description = "squat, bench or deadlift"),
        ("minimum" = i32, Path, description = "Inclusive lower bound on the best lift")
    ),
    responses(
        (status = 200, description = "Athletes meeting the minimum", body = Vec<AthleteResponse>),
        (status = 400, description = "Unrecognized lift or non-numeric minimum", body = ErrorResponse)
    ),
    tag = "queries"
)]
pub async fn list_by_lift_minimum(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<Response, WebError> {
    let Path((lift, minimum)) = path?;
    let lift = services::parse_competition_lift(&lift)?;

    let athletes = services::list_by_minimum(state.store.as_ref(), lift, minimum).await?;

    Ok(to_response(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/totals/minimum/{minimum}",
    params(
        ("minimum" = i32, Path, description = "Inclusive lower bound on the total")
    ),
    responses(
        (status = 200, description = "Athletes meeting the minimum total", body = Vec<AthleteResponse>),
        (status = 400, description = "Non-numeric minimum", body = ErrorResponse)
    ),
    tag = "queries"
)]
pub async fn list_by_total_minimum(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(minimum) = path?;
    let athletes = services::list_by_minimum(state.store.as_ref(), Lift::Total, minimum).await?;

    Ok(to_response(athletes).into_response())
}
