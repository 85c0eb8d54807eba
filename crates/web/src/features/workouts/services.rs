use chrono::Local;
use storage::{
    models::{Athlete, Workout, WorkoutEntry},
    repository::AthleteStore,
    services::aggregation,
};

use crate::error::WebResult;
use crate::features::athletes::services::get_athlete;

/// Record a workout for the named athlete, dated today
///
/// Read, update and save are separate store calls, so two workouts posted
/// for the same athlete at once can overwrite each other.
pub async fn add_workout(
    store: &dyn AthleteStore,
    first_name: &str,
    last_name: &str,
    entry: WorkoutEntry,
) -> WebResult<(Athlete, Workout)> {
    let athlete = get_athlete(store, first_name, last_name).await?;
    let previous_total = athlete.total;

    let (athlete, workout) = aggregation::apply_workout(athlete, entry, Local::now().date_naive());
    let athlete = store.save(athlete).await?;

    if athlete.total > previous_total {
        tracing::info!(
            athlete = %athlete.full_name(),
            previous_total,
            total = athlete.total,
            "New personal best total"
        );
    }

    Ok((athlete, workout))
}

/// Clear the named athlete's workout history
pub async fn reset_workouts(
    store: &dyn AthleteStore,
    first_name: &str,
    last_name: &str,
) -> WebResult<Athlete> {
    let athlete = get_athlete(store, first_name, last_name).await?;
    let cleared = aggregation::reset_workouts(athlete);

    Ok(store.save(cleared).await?)
}
