use utoipa::OpenApi;

use crate::features::{athletes, workouts};

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_lifts,
        athletes::handlers::delete_athlete,
        athletes::handlers::delete_all_athletes,
        athletes::handlers::list_by_weight_class,
        athletes::handlers::list_by_lift_minimum,
        athletes::handlers::list_by_total_minimum,
        workouts::handlers::add_workout,
        workouts::handlers::reset_workouts,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateLiftsRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::WeightClassResponse,
            storage::dto::workout::AddWorkoutRequest,
            storage::dto::workout::WorkoutResponse,
            storage::dto::common::DeletedResponse,
            storage::dto::common::ErrorResponse,
            storage::models::Gender,
            storage::models::Lift,
            storage::models::Workout,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete records and lift edits"),
        (name = "workouts", description = "Workout logging"),
        (name = "queries", description = "Filtered athlete lookups"),
    )
)]
pub struct ApiDoc;
