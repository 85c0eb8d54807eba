use tokio::sync::RwLock;

use super::{AthleteFilter, AthleteStore};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// In-process [`AthleteStore`] used when no database is configured.
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryAthleteStore {
    athletes: RwLock<Vec<Athlete>>,
}

impl MemoryAthleteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AthleteStore for MemoryAthleteStore {
    async fn find_all(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>> {
        let athletes = self.athletes.read().await;

        Ok(athletes
            .iter()
            .filter(|athlete| filter.matches(athlete))
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: &AthleteFilter) -> Result<Option<Athlete>> {
        let athletes = self.athletes.read().await;

        Ok(athletes
            .iter()
            .find(|athlete| filter.matches(athlete))
            .cloned())
    }

    async fn insert(&self, athlete: Athlete) -> Result<Athlete> {
        let mut athletes = self.athletes.write().await;

        // checked under the write lock, so two inserts cannot both pass
        let taken = athletes.iter().any(|existing| {
            existing.first_name == athlete.first_name && existing.last_name == athlete.last_name
        });
        if taken {
            return Err(StorageError::Duplicate(format!(
                "An athlete named {} already exists",
                athlete.full_name()
            )));
        }

        athletes.push(athlete.clone());
        Ok(athlete)
    }

    async fn save(&self, athlete: Athlete) -> Result<Athlete> {
        let mut athletes = self.athletes.write().await;

        let clash = athletes.iter().any(|existing| {
            existing.athlete_id != athlete.athlete_id
                && existing.first_name == athlete.first_name
                && existing.last_name == athlete.last_name
        });
        if clash {
            return Err(StorageError::Duplicate(format!(
                "An athlete named {} already exists",
                athlete.full_name()
            )));
        }

        let slot = athletes
            .iter_mut()
            .find(|existing| existing.athlete_id == athlete.athlete_id)
            .ok_or(StorageError::NotFound)?;

        *slot = athlete.clone();
        Ok(athlete)
    }

    async fn delete_one(&self, filter: &AthleteFilter) -> Result<()> {
        let mut athletes = self.athletes.write().await;

        let index = athletes
            .iter()
            .position(|athlete| filter.matches(athlete))
            .ok_or(StorageError::NotFound)?;

        athletes.remove(index);
        Ok(())
    }

    async fn delete_many(&self, filter: &AthleteFilter) -> Result<u64> {
        let mut athletes = self.athletes.write().await;

        let before = athletes.len();
        athletes.retain(|athlete| !filter.matches(athlete));

        Ok((before - athletes.len()) as u64)
    }
}
