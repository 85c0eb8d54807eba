use axum::{Router, routing::post};

use super::handlers::{add_workout, reset_workouts};
use crate::state::AppState;

/// Workout logging, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/athletes/:first_name/:last_name/workouts",
        post(add_workout).delete(reset_workouts),
    )
}
