//! Persistence gateway: an explicit repository over the `person` table.

mod memory;
mod postgres;

pub use memory::MemStore;
pub use postgres::{ensure_database_exists, ensure_person_table, PgStore};

use async_trait::async_trait;

use crate::error::AppError;
use crate::person::Person;

/// Repository contract for Person rows. The store assigns identities on
/// insert and is the arbiter of conflicting concurrent writes; replace
/// and remove are single atomic statements keyed by id.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Every stored Person, store-default order.
    async fn list(&self) -> Result<Vec<Person>, AppError>;

    /// Lookup by id; `None` for an absent id is not an error.
    async fn find(&self, id: i32) -> Result<Option<Person>, AppError>;

    /// Persists a new row, ignoring any caller-supplied id, and returns
    /// the row with its assigned identity.
    async fn insert(&self, person: Person) -> Result<Person, AppError>;

    /// Replaces the row with `person.id` in full. `AppError::Conflict`
    /// when no row was affected (it vanished between stage and commit).
    async fn replace(&self, person: &Person) -> Result<(), AppError>;

    /// Deletes the row with this id. `AppError::Conflict` when no row was
    /// affected; callers check existence first, so a miss here means a
    /// concurrent removal.
    async fn remove(&self, id: i32) -> Result<(), AppError>;

    /// Existence re-check after a conflict.
    async fn exists(&self, id: i32) -> Result<bool, AppError>;
}
