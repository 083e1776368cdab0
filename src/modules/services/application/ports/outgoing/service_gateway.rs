use async_trait::async_trait;

use crate::modules::services::domain::entities::ServiceSection;
use crate::shared::domain::{EntityId, ImageUpload, Localized};
use crate::shared::http::ApiFailure;
use crate::shared::listing::BulkDeleteGateway;

/// Section fields ready for the wire. Image is optional on both create and
/// update; when present the adapter switches to multipart encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPayload {
    pub title: Localized<String>,
    pub sub_title: Localized<String>,
    pub description: Localized<String>,
    pub is_active: bool,
    pub image: Option<ImageUpload>,
}

/// Item fields ready for the wire. Form validation guarantees an image is
/// present when the item is new; on update a `None` image means "keep the
/// stored one".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPayload {
    pub title: Localized<String>,
    pub category: Localized<String>,
    pub description: Localized<String>,
    pub order: i32,
    pub image: Option<ImageUpload>,
}

/// REST operations on service sections and their nested items. Item
/// mutations return the updated parent section.
#[async_trait]
pub trait ServiceGateway: BulkDeleteGateway<Entity = ServiceSection> {
    async fn get(&self, id: &EntityId) -> Result<ServiceSection, ApiFailure>;

    async fn create(&self, payload: &SectionPayload) -> Result<ServiceSection, ApiFailure>;

    async fn update(
        &self,
        id: &EntityId,
        payload: &SectionPayload,
    ) -> Result<ServiceSection, ApiFailure>;

    async fn add_item(
        &self,
        section_id: &EntityId,
        payload: &ItemPayload,
    ) -> Result<ServiceSection, ApiFailure>;

    async fn update_item(
        &self,
        section_id: &EntityId,
        item_id: &EntityId,
        payload: &ItemPayload,
    ) -> Result<ServiceSection, ApiFailure>;

    async fn delete_item(
        &self,
        section_id: &EntityId,
        item_id: &EntityId,
    ) -> Result<ServiceSection, ApiFailure>;
}
