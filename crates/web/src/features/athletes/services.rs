use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateLiftsRequest},
    error::StorageError,
    models::{Athlete, Lift, WeightClass},
    repository::{AthleteFilter, AthleteStore},
    services::{
        aggregation,
        classification::{self, GenderPolicy},
    },
};

use crate::error::{WebError, WebResult};

/// List all athletes
pub async fn list_athletes(store: &dyn AthleteStore) -> WebResult<Vec<Athlete>> {
    Ok(store.find_all(&AthleteFilter::all()).await?)
}

/// Get athlete by exact name
pub async fn get_athlete(
    store: &dyn AthleteStore,
    first_name: &str,
    last_name: &str,
) -> WebResult<Athlete> {
    store
        .find_one(&AthleteFilter::by_name(first_name, last_name))
        .await?
        .ok_or(WebError::Storage(StorageError::NotFound))
}

/// Create a new athlete, classifying the body weight and seeding the bests
pub async fn create_athlete(
    store: &dyn AthleteStore,
    policy: GenderPolicy,
    request: &CreateAthleteRequest,
) -> WebResult<Athlete> {
    let gender = classification::resolve_gender_with(&request.gender, policy).ok_or_else(|| {
        WebError::invalid_field("gender", "invalid_gender", "Gender must be 'Male' or 'Female'")
    })?;

    let weight_class = classification::classify(request.weight, gender.is_male());

    let athlete = aggregation::edit_lifts(
        Athlete::new(&request.first_name, &request.last_name, weight_class),
        request.initial_lifts(),
    );

    let athlete = store.insert(athlete).await?;
    tracing::info!(
        athlete = %athlete.full_name(),
        weight_class = %athlete.weight_class,
        "Athlete created"
    );

    Ok(athlete)
}

/// Overwrite an athlete's bests
pub async fn update_lifts(
    store: &dyn AthleteStore,
    first_name: &str,
    last_name: &str,
    request: &UpdateLiftsRequest,
) -> WebResult<Athlete> {
    let existing = get_athlete(store, first_name, last_name).await?;
    let updated = aggregation::edit_lifts(existing, request.into());

    Ok(store.save(updated).await?)
}

/// Delete an athlete
pub async fn delete_athlete(
    store: &dyn AthleteStore,
    first_name: &str,
    last_name: &str,
) -> WebResult<()> {
    store
        .delete_one(&AthleteFilter::by_name(first_name, last_name))
        .await?;
    tracing::info!(athlete = %format!("{} {}", first_name, last_name), "Athlete deleted");

    Ok(())
}

/// Delete every athlete, returning how many were removed
pub async fn delete_all_athletes(store: &dyn AthleteStore) -> WebResult<u64> {
    let deleted = store.delete_many(&AthleteFilter::all()).await?;
    tracing::info!(deleted, "All athletes deleted");

    Ok(deleted)
}

/// Athletes in the weight class named by `label` (e.g. `74kg`, `120kg+`)
pub async fn list_by_weight_class(
    store: &dyn AthleteStore,
    label: &str,
) -> WebResult<Vec<Athlete>> {
    let weight_class = WeightClass::from_label(label)
        .map_err(|msg| WebError::invalid_field("weight_class", "invalid_weight_class", msg))?;

    Ok(store
        .find_all(&AthleteFilter::in_weight_class(weight_class))
        .await?)
}

/// Athletes whose stored value for `lift` is at least `minimum`
pub async fn list_by_minimum(
    store: &dyn AthleteStore,
    lift: Lift,
    minimum: i32,
) -> WebResult<Vec<Athlete>> {
    Ok(store
        .find_all(&AthleteFilter::at_least(lift, minimum))
        .await?)
}

/// Parses a competition lift name. `total` is not a lift here.
pub fn parse_competition_lift(name: &str) -> WebResult<Lift> {
    match name.parse::<Lift>() {
        Ok(Lift::Total) | Err(_) => Err(WebError::invalid_field(
            "lift",
            "invalid_lift",
            format!("Unrecognized lift '{}'; expected squat, bench or deadlift", name),
        )),
        Ok(lift) => Ok(lift),
    }
}
