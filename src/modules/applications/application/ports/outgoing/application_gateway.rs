use async_trait::async_trait;

use crate::modules::applications::domain::entities::{Application, ApplicationStatus};
use crate::shared::domain::EntityId;
use crate::shared::http::ApiFailure;
use crate::shared::listing::CollectionGateway;

/// REST operations on applications. There is no create/update surface (the
/// public site submits applications) and no bulk delete endpoint exists for
/// them.
#[async_trait]
pub trait ApplicationGateway: CollectionGateway<Entity = Application> {
    async fn get(&self, id: &EntityId) -> Result<Application, ApiFailure>;

    /// Applications for one job posting.
    async fn list_for_career(&self, career_id: &EntityId) -> Result<Vec<Application>, ApiFailure>;

    /// One PATCH carrying the literal status word.
    async fn update_status(
        &self,
        id: &EntityId,
        status: ApplicationStatus,
    ) -> Result<Application, ApiFailure>;
}
