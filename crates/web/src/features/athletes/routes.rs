use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    create_athlete, delete_all_athletes, delete_athlete, get_athlete, list_athletes,
    list_by_lift_minimum, list_by_total_minimum, list_by_weight_class, update_lifts,
};
use crate::state::AppState;

/// Athlete CRUD and filtered queries, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/athletes",
            get(list_athletes)
                .post(create_athlete)
                .delete(delete_all_athletes),
        )
        .route(
            "/athletes/:first_name/:last_name",
            get(get_athlete).delete(delete_athlete),
        )
        .route("/athletes/:first_name/:last_name/lifts", put(update_lifts))
        .route("/weight-classes/:weight_class", get(list_by_weight_class))
        .route("/lifts/:lift/minimum/:minimum", get(list_by_lift_minimum))
        .route("/totals/minimum/:minimum", get(list_by_total_minimum))
}
