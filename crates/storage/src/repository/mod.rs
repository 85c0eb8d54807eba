pub mod athlete;
pub mod filter;
pub mod memory;

pub use athlete::AthleteRepository;
pub use filter::{AthleteFilter, LiftMinimum};
pub use memory::MemoryAthleteStore;

use crate::error::Result;
use crate::models::Athlete;

/// Document-style persistence for athletes.
///
/// `save` overwrites the whole record, so a read-modify-write from two
/// requests at once keeps only the last write.
#[async_trait::async_trait]
pub trait AthleteStore: Send + Sync {
    /// Matching athletes in insertion order.
    async fn find_all(&self, filter: &AthleteFilter) -> Result<Vec<Athlete>>;

    async fn find_one(&self, filter: &AthleteFilter) -> Result<Option<Athlete>>;

    /// Fails with `Duplicate` when the name pair is already taken.
    async fn insert(&self, athlete: Athlete) -> Result<Athlete>;

    /// Fails with `NotFound` when no record has this `athlete_id`.
    async fn save(&self, athlete: Athlete) -> Result<Athlete>;

    /// Removes the first match. Fails with `NotFound` when nothing matches.
    async fn delete_one(&self, filter: &AthleteFilter) -> Result<()>;

    async fn delete_many(&self, filter: &AthleteFilter) -> Result<u64>;
}
