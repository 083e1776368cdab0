use async_trait::async_trait;

use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::{EntityId, Localized};
use crate::shared::http::ApiFailure;
use crate::shared::listing::BulkDeleteGateway;

/// Validated career fields ready for the wire. Responsibility/requirement
/// lists are already split into trimmed, non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerPayload {
    pub title: Localized<String>,
    pub department: Localized<String>,
    pub location: Localized<String>,
    pub employment_type: Localized<String>,
    pub short_description: Localized<String>,
    pub description: Localized<String>,
    pub responsibilities: Localized<Vec<String>>,
    pub requirements: Localized<Vec<String>>,
    pub is_active: bool,
}

/// REST operations on job postings. Careers travel as plain JSON, since no
/// image accompanies them, unlike sections and users.
#[async_trait]
pub trait CareerGateway: BulkDeleteGateway<Entity = Career> {
    async fn get(&self, id: &EntityId) -> Result<Career, ApiFailure>;

    async fn create(&self, payload: &CareerPayload) -> Result<Career, ApiFailure>;

    async fn update(&self, id: &EntityId, payload: &CareerPayload) -> Result<Career, ApiFailure>;

    /// Flip active/inactive server-side; the new state comes back via refetch.
    async fn toggle_status(&self, id: &EntityId) -> Result<(), ApiFailure>;
}
