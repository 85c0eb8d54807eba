use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::athlete::AthleteResponse;
use crate::models::{Workout, WorkoutEntry};

/// Request payload for logging a workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddWorkoutRequest {
    #[validate(range(min = 0, max = 10000, message = "Squat must be between 0 and 10000"))]
    pub weight_squatted: Option<i32>,

    #[validate(range(min = 0, max = 10000, message = "Bench must be between 0 and 10000"))]
    pub weight_benched: Option<i32>,

    #[validate(range(min = 0, max = 10000, message = "Deadlift must be between 0 and 10000"))]
    pub weight_deadlifted: Option<i32>,

    /// Effort of the heaviest set, 1.0 to 10.0
    #[validate(range(min = 1.0, max = 10.0, message = "Top set RPE must be between 1 and 10"))]
    pub top_set_rpe: f64,
}

impl From<&AddWorkoutRequest> for WorkoutEntry {
    fn from(req: &AddWorkoutRequest) -> Self {
        Self {
            weight_squatted: req.weight_squatted,
            weight_benched: req.weight_benched,
            weight_deadlifted: req.weight_deadlifted,
            top_set_rpe: req.top_set_rpe,
        }
    }
}

/// The recorded workout together with the athlete it updated
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub athlete: AthleteResponse,
    pub workout: Workout,
}
