use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

use super::{AthleteFilter, AthleteStore, LiftMinimum};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, WeightClass, Workout};

const ATHLETE_COLUMNS: &str = r#"
    athlete_id, first_name, last_name,
    weight_class_kg, weight_class_plus, weight_class_gender,
    best_squat, best_bench, best_deadlift, total,
    workouts, created_at
"#;

#[derive(FromRow)]
struct AthleteRow {
    athlete_id: Uuid,
    first_name: String,
    last_name: String,
    weight_class_kg: i32,
    weight_class_plus: bool,
    weight_class_gender: String,
    best_squat: i32,
    best_bench: i32,
    best_deadlift: i32,
    total: i32,
    workouts: Json<Vec<Workout>>,
    created_at: NaiveDateTime,
}

impl TryFrom<AthleteRow> for Athlete {
    type Error = StorageError;

    fn try_from(row: AthleteRow) -> Result<Self> {
        let gender = row
            .weight_class_gender
            .parse()
            .map_err(StorageError::InvalidRecord)?;

        Ok(Self {
            athlete_id: row.athlete_id,
            first_name: row.first_name,
            last_name: row.last_name,
            weight_class: WeightClass {
                threshold_kg: row.weight_class_kg,
                plus: row.weight_class_plus,
                gender,
            },
            best_squat: row.best_squat,
            best_bench: row.best_bench,
            best_deadlift: row.best_deadlift,
            total: row.total,
            workouts: row.workouts.0,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL-backed [`AthleteStore`]. One row per athlete, with the workout
/// history kept as a JSONB array on the row.
#[derive(Debug, Clone)]
pub struct AthleteRepository {
    pool: PgPool,
}

impl AthleteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_query(filter: &AthleteFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new("SELECT ");
    query.push(ATHLETE_COLUMNS);
    query.push(" FROM athletes WHERE 1=1");
    push_conditions(&mut query, filter);
    query
}

/// Every match, in insertion order.
fn find_all_query(filter: &AthleteFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = select_query(filter);
    query.push(" ORDER BY created_at, athlete_id");
    query
}

fn find_one_query(filter: &AthleteFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = select_query(filter);
    query.push(" ORDER BY created_at, athlete_id LIMIT 1");
    query
}

/// Deletes only the earliest match.
fn delete_one_query(filter: &AthleteFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(
        "DELETE FROM athletes WHERE athlete_id IN (SELECT athlete_id FROM athletes WHERE 1=1",
    );
    push_conditions(&mut query, filter);
    query.push(" ORDER BY created_at, athlete_id LIMIT 1)");
    query
}

fn delete_many_query(filter: &AthleteFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new("DELETE FROM athletes WHERE 1=1");
    push_conditions(&mut query, filter);
    query
}

fn push_conditions<'a>(query: &mut QueryBuilder<'a, Postgres>, filter: &'a AthleteFilter) {
    if let Some(ref first_name) = filter.first_name {
        query.push(" AND first_name = ");
        query.push_bind(first_name);
    }

    if let Some(ref last_name) = filter.last_name {
        query.push(" AND last_name = ");
        query.push_bind(last_name);
    }

    if let Some(weight_class) = filter.weight_class {
        query.push(" AND weight_class_kg = ");
        query.push_bind(weight_class.threshold_kg);
        query.push(" AND weight_class_plus = ");
        query.push_bind(weight_class.plus);
        query.push(" AND weight_class_gender = ");
        query.push_bind(weight_class.gender.as_str());
    }

    if let Some(LiftMinimum { lift, minimum }) = filter.minimum {
        query.push(" AND ");
        query.push(lift.as_column());
        query.push(" >= ");
        query.push_bind(minimum);
    }
}

fn name_taken(athlete: &Athlete) -> StorageError {
    StorageError::Duplicate(format!(
        "An athlete named {} already exists",
        athlete.full_name()
    ))
}

#[async_trait::async_trait]
impl AthleteStore for AthleteRepository {
    async fn find_all(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>> {
        let mut query = find_all_query(filter);

        let rows = query
            .build_query_as::<AthleteRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Athlete::try_from).collect()
    }

    async fn find_one(&self, filter: &AthleteFilter) -> Result<Option<Athlete>> {
        let mut query = find_one_query(filter);

        let row = query
            .build_query_as::<AthleteRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(Athlete::try_from).transpose()
    }

    async fn insert(&self, athlete: Athlete) -> Result<Athlete> {
        let sql = format!(
            r#"
            INSERT INTO athletes (
                athlete_id, first_name, last_name,
                weight_class_kg, weight_class_plus, weight_class_gender,
                best_squat, best_bench, best_deadlift, total,
                workouts, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            ATHLETE_COLUMNS
        );

        let row = sqlx::query_as::<_, AthleteRow>(&sql)
            .bind(athlete.athlete_id)
            .bind(&athlete.first_name)
            .bind(&athlete.last_name)
            .bind(athlete.weight_class.threshold_kg)
            .bind(athlete.weight_class.plus)
            .bind(athlete.weight_class.gender.as_str())
            .bind(athlete.best_squat)
            .bind(athlete.best_bench)
            .bind(athlete.best_deadlift)
            .bind(athlete.total)
            .bind(Json(&athlete.workouts))
            .bind(athlete.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from);

        match row {
            Ok(row) => Athlete::try_from(row),
            Err(e) if e.is_unique_violation() => Err(name_taken(&athlete)),
            Err(e) => Err(e),
        }
    }

    async fn save(&self, athlete: Athlete) -> Result<Athlete> {
        let sql = format!(
            r#"
            UPDATE athletes
            SET first_name = $2,
                last_name = $3,
                weight_class_kg = $4,
                weight_class_plus = $5,
                weight_class_gender = $6,
                best_squat = $7,
                best_bench = $8,
                best_deadlift = $9,
                total = $10,
                workouts = $11
            WHERE athlete_id = $1
            RETURNING {}
            "#,
            ATHLETE_COLUMNS
        );

        let row = sqlx::query_as::<_, AthleteRow>(&sql)
            .bind(athlete.athlete_id)
            .bind(&athlete.first_name)
            .bind(&athlete.last_name)
            .bind(athlete.weight_class.threshold_kg)
            .bind(athlete.weight_class.plus)
            .bind(athlete.weight_class.gender.as_str())
            .bind(athlete.best_squat)
            .bind(athlete.best_bench)
            .bind(athlete.best_deadlift)
            .bind(athlete.total)
            .bind(Json(&athlete.workouts))
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from);

        match row {
            Ok(Some(row)) => Athlete::try_from(row),
            Ok(None) => Err(StorageError::NotFound),
            Err(e) if e.is_unique_violation() => Err(name_taken(&athlete)),
            Err(e) => Err(e),
        }
    }

    async fn delete_one(&self, filter: &AthleteFilter) -> Result<()> {
        let mut query = delete_one_query(filter);

        let result = query.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete_many(&self, filter: &AthleteFilter) -> Result<u64> {
        let mut query = delete_many_query(filter);

        let result = query.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
