use axum::{Router, routing::get};

use super::handlers::{
    about, chat, create_athlete, home, leaderboard, new_athlete_form, workouts,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/athletes/new", get(new_athlete_form).post(create_athlete))
        .route("/leaderboards/:lift", get(leaderboard))
        .route("/workouts", get(workouts))
        .route("/about", get(about))
        .route("/chat", get(chat))
}
