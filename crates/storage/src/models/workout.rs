use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A logged training session. Recorded once and never edited.
///
/// `top_set_rpe`: "On a scale of 1 - 10, how much effort did you give when
/// you lifted the heaviest weight for the day?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Workout {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squat_weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench_weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadlift_weight: Option<i32>,
    pub top_set_rpe: f64,
}

/// Already-validated lifts for a new workout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkoutEntry {
    pub weight_squatted: Option<i32>,
    pub weight_benched: Option<i32>,
    pub weight_deadlifted: Option<i32>,
    pub top_set_rpe: f64,
}
