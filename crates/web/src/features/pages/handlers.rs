use axum::{
    Form,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use storage::{dto::athlete::CreateAthleteRequest, models::Lift, services::aggregation};
use validator::Validate;

use super::render;
use crate::error::{WebError, WebResult};
use crate::features::athletes::services;
use crate::state::AppState;

/// Number of athletes shown on each leaderboard page
pub const LEADERBOARD_SIZE: usize = 3;

pub async fn home(State(state): State<AppState>) -> WebResult<Html<String>> {
    let athletes = services::list_athletes(state.store.as_ref()).await?;

    Ok(Html(render::home(&athletes)))
}

pub async fn new_athlete_form() -> Html<String> {
    Html(render::create_form(&[]))
}

/// Creates the athlete and redirects home. A rejected submission gets the
/// form back with the reasons listed, under the same status the API uses.
pub async fn create_athlete(
    State(state): State<AppState>,
    form: Result<Form<CreateAthleteRequest>, FormRejection>,
) -> Response {
    match submit_athlete(&state, form).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!("Failed to create athlete from form: {}", e);
            }
            (status, Html(render::create_form(&e.messages()))).into_response()
        }
    }
}

async fn submit_athlete(
    state: &AppState,
    form: Result<Form<CreateAthleteRequest>, FormRejection>,
) -> WebResult<()> {
    let Form(req) = form?;

    req.validate()?;

    services::create_athlete(state.store.as_ref(), state.gender_policy, &req).await?;

    Ok(())
}

pub async fn leaderboard(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> WebResult<Html<String>> {
    let Path(lift) = path?;
    let lift: Lift = lift
        .parse()
        .map_err(|msg: String| WebError::invalid_field("lift", "invalid_lift", msg))?;

    let athletes = services::list_athletes(state.store.as_ref()).await?;
    let top = aggregation::leaderboard(athletes, lift, LEADERBOARD_SIZE);

    Ok(Html(render::leaderboard(lift, &top)))
}

pub async fn workouts(State(state): State<AppState>) -> WebResult<Html<String>> {
    let athletes = services::list_athletes(state.store.as_ref()).await?;

    Ok(Html(render::workouts(&aggregation::with_workouts(athletes))))
}

pub async fn about() -> Html<String> {
    Html(render::about())
}

pub async fn chat() -> Html<String> {
    Html(render::chat())
}
