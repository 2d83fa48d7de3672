use crate::errors::RepositoryError;
use async_trait::async_trait;

/// Generic data-access contract over one persisted entity type.
///
/// Each call is its own unit of work: the implementation commits before
/// returning, and no transaction spans multiple calls. A missing row is
/// reported as `Ok(None)` from `get_by_id`, never as an error.
#[async_trait]
pub trait Repository<E, Id>: Send + Sync {
    /// Every stored record in store-native order. An empty store yields an
    /// empty vec.
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// The record with the given key, or `None` if no row matches.
    async fn get_by_id(&self, id: Id) -> Result<Option<E>, RepositoryError>;

    /// Inserts the entity. The store assigns the primary key; the persisted
    /// record (carrying the assigned key) is returned.
    async fn create(&self, entity: &E) -> Result<E, RepositoryError>;

    /// Full-record replace keyed on the entity's id. Zero matched rows is
    /// not an error; callers that care check existence first.
    async fn update(&self, entity: &E) -> Result<(), RepositoryError>;

    /// Removes the row matching the entity's identity.
    async fn delete(&self, entity: &E) -> Result<(), RepositoryError>;
}
