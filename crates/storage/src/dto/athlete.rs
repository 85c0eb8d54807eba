use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Athlete, Gender, LiftsUpdate, WeightClass, Workout};

/// Weight class as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightClassResponse {
    pub threshold_kg: i32,
    pub plus: bool,
    pub gender: Gender,
    /// e.g. `66kg` or `120kg+`
    pub label: String,
}

/// Response containing an athlete's lifts and workout history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub weight_class: WeightClassResponse,
    pub squat: i32,
    pub bench: i32,
    pub deadlift: i32,
    pub total: i32,
    pub workouts: Vec<Workout>,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new athlete
///
/// Lifts are stored in whatever unit the caller uses; only `weight` (body
/// weight) is interpreted, in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    /// Body weight in kilograms; fractions are truncated when classifying
    #[validate(range(
        min = 0.0,
        max = 1000.0,
        message = "Body weight must be between 0 and 1000 kg"
    ))]
    pub weight: f64,

    /// `Male` or `Female`, case-insensitive
    #[validate(length(max = 32))]
    pub gender: String,

    #[validate(range(min = 0, max = 10000, message = "Squat must be between 0 and 10000"))]
    pub squat: Option<i32>,

    #[validate(range(min = 0, max = 10000, message = "Bench must be between 0 and 10000"))]
    pub bench: Option<i32>,

    #[validate(range(min = 0, max = 10000, message = "Deadlift must be between 0 and 10000"))]
    pub deadlift: Option<i32>,
}

impl CreateAthleteRequest {
    /// Initial bests, defaulting to zero.
    pub fn initial_lifts(&self) -> LiftsUpdate {
        LiftsUpdate {
            squat: Some(self.squat.unwrap_or(0)),
            bench: Some(self.bench.unwrap_or(0)),
            deadlift: Some(self.deadlift.unwrap_or(0)),
        }
    }
}

/// Request payload for overwriting an athlete's bests
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLiftsRequest {
    #[validate(range(min = 0, max = 10000, message = "Squat must be between 0 and 10000"))]
    pub squat: Option<i32>,

    #[validate(range(min = 0, max = 10000, message = "Bench must be between 0 and 10000"))]
    pub bench: Option<i32>,

    #[validate(range(min = 0, max = 10000, message = "Deadlift must be between 0 and 10000"))]
    pub deadlift: Option<i32>,
}

impl From<&UpdateLiftsRequest> for LiftsUpdate {
    fn from(req: &UpdateLiftsRequest) -> Self {
        Self {
            squat: req.squat,
            bench: req.bench,
            deadlift: req.deadlift,
        }
    }
}

impl From<WeightClass> for WeightClassResponse {
    fn from(weight_class: WeightClass) -> Self {
        Self {
            threshold_kg: weight_class.threshold_kg,
            plus: weight_class.plus,
            gender: weight_class.gender,
            label: weight_class.label(),
        }
    }
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            weight_class: athlete.weight_class.into(),
            squat: athlete.best_squat,
            bench: athlete.best_bench,
            deadlift: athlete.best_deadlift,
            total: athlete.total,
            workouts: athlete.workouts,
            created_at: athlete.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            weight: 60.0,
            gender: "Female".to_string(),
            squat: None,
            bench: Some(60),
            deadlift: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let req = CreateAthleteRequest {
            first_name: String::new(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_negative_lift_is_rejected() {
        let req = CreateAthleteRequest {
            squat: Some(-5),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("squat"));
    }

    #[test]
    fn test_initial_lifts_default_to_zero() {
        let lifts = request().initial_lifts();
        assert_eq!(lifts.squat, Some(0));
        assert_eq!(lifts.bench, Some(60));
        assert_eq!(lifts.deadlift, Some(0));
    }

    #[test]
    fn test_missing_optional_lifts_deserialize() {
        let req: CreateAthleteRequest = serde_json::from_str(
            r#"{"first_name":"Jane","last_name":"Doe","weight":60,"gender":"Female"}"#,
        )
        .unwrap();
        assert_eq!(req.squat, None);
        assert_eq!(req.weight, 60.0);
    }

    #[test]
    fn test_response_carries_label() {
        let athlete = Athlete::new(
            "Jane",
            "Doe",
            WeightClass {
                threshold_kg: 84,
                plus: true,
                gender: Gender::Female,
            },
        );
        let response = AthleteResponse::from(athlete);
        assert_eq!(response.weight_class.label, "84kg+");
        assert_eq!(response.total, 0);
    }
}
