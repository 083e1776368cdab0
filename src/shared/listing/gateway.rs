use async_trait::async_trait;

use crate::shared::domain::EntityId;
use crate::shared::http::ApiFailure;

/// Anything the backend identifies with an `_id`.
pub trait HasId {
    fn id(&self) -> &EntityId;
}

/// Display names used in notifications and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLabels {
    /// Capitalized singular, e.g. "Career".
    pub singular: &'static str,
    /// Lowercase plural, e.g. "careers".
    pub plural: &'static str,
}

/// The capability every managed collection shares: fetch the full collection
/// and delete one entity. Resource gateways extend this with their own
/// operations; the generic list controller needs nothing more.
#[async_trait]
pub trait CollectionGateway: Send + Sync {
    type Entity: HasId + Clone + Send + Sync;

    fn labels(&self) -> ResourceLabels;

    async fn list(&self) -> Result<Vec<Self::Entity>, ApiFailure>;

    async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure>;
}

/// Collections whose backend accepts a batched delete in one call. The batch
/// is atomic-or-fail from the console's point of view; partial success is not
/// modeled.
#[async_trait]
pub trait BulkDeleteGateway: CollectionGateway {
    async fn bulk_delete(&self, ids: &[EntityId]) -> Result<(), ApiFailure>;
}
