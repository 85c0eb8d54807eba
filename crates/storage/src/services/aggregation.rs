use chrono::NaiveDate;

use crate::models::{Athlete, Lift, LiftsUpdate, Workout, WorkoutEntry};

pub fn compute_total(squat: i32, bench: i32, deadlift: i32) -> i32 {
    squat + bench + deadlift
}

/// Date stamp stored on a workout, e.g. `October 18, 2026`.
pub fn format_workout_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Records a workout on the athlete.
///
/// Every lift present in `entry` is copied onto the workout. A lift only
/// becomes the new best when it is strictly heavier than the stored best,
/// and the stored total only ever moves up.
pub fn apply_workout(
    mut athlete: Athlete,
    entry: WorkoutEntry,
    date: NaiveDate,
) -> (Athlete, Workout) {
    let workout = Workout {
        date: format_workout_date(date),
        squat_weight: entry.weight_squatted,
        bench_weight: entry.weight_benched,
        deadlift_weight: entry.weight_deadlifted,
        top_set_rpe: entry.top_set_rpe,
    };

    if let Some(squat) = entry.weight_squatted
        && squat > athlete.best_squat
    {
        athlete.best_squat = squat;
    }

    if let Some(bench) = entry.weight_benched
        && bench > athlete.best_bench
    {
        athlete.best_bench = bench;
    }

    if let Some(deadlift) = entry.weight_deadlifted
        && deadlift > athlete.best_deadlift
    {
        athlete.best_deadlift = deadlift;
    }

    let total = compute_total(athlete.best_squat, athlete.best_bench, athlete.best_deadlift);
    if total > athlete.total {
        athlete.total = total;
    }

    athlete.workouts.push(workout.clone());

    (athlete, workout)
}

/// Clears the workout history. Bests and total are kept.
pub fn reset_workouts(mut athlete: Athlete) -> Athlete {
    athlete.workouts.clear();
    athlete
}

/// Overwrites the given bests and recomputes the total, which may go down.
pub fn edit_lifts(mut athlete: Athlete, update: LiftsUpdate) -> Athlete {
    if let Some(squat) = update.squat {
        athlete.best_squat = squat;
    }
    if let Some(bench) = update.bench {
        athlete.best_bench = bench;
    }
    if let Some(deadlift) = update.deadlift {
        athlete.best_deadlift = deadlift;
    }

    athlete.total = compute_total(athlete.best_squat, athlete.best_bench, athlete.best_deadlift);
    athlete
}

/// The `limit` athletes with the heaviest value for `lift`, heaviest first.
/// Ties keep their incoming order.
pub fn leaderboard(mut athletes: Vec<Athlete>, lift: Lift, limit: usize) -> Vec<Athlete> {
    athletes.sort_by_key(|athlete| std::cmp::Reverse(lift.value_of(athlete)));
    athletes.truncate(limit);
    athletes
}

/// Athletes that have logged at least one workout, by last name descending.
pub fn with_workouts(athletes: Vec<Athlete>) -> Vec<Athlete> {
    let mut filtered: Vec<Athlete> = athletes.into_iter().filter(Athlete::has_workouts).collect();
    filtered.sort_by(|a, b| b.last_name.cmp(&a.last_name));
    filtered
}
