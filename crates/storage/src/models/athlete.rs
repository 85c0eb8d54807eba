use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{WeightClass, Workout};

/// A tracked powerlifter. The `(first_name, last_name)` pair is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub weight_class: WeightClass,
    pub best_squat: i32,
    pub best_bench: i32,
    pub best_deadlift: i32,
    pub total: i32,
    pub workouts: Vec<Workout>,
    pub created_at: NaiveDateTime,
}

impl Athlete {
    /// A fresh athlete with no lifts and an empty workout history.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        weight_class: WeightClass,
    ) -> Self {
        Self {
            athlete_id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            weight_class,
            best_squat: 0,
            best_bench: 0,
            best_deadlift: 0,
            total: 0,
            workouts: Vec::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_workouts(&self) -> bool {
        !self.workouts.is_empty()
    }
}

/// Replacement values for an athlete's bests. Absent fields are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LiftsUpdate {
    pub squat: Option<i32>,
    pub bench: Option<i32>,
    pub deadlift: Option<i32>,
}
