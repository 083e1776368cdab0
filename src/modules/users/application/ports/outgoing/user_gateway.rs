use async_trait::async_trait;

use crate::modules::users::domain::entities::{User, UserRole};
use crate::shared::domain::{EntityId, ImageUpload};
use crate::shared::http::ApiFailure;
use crate::shared::listing::BulkDeleteGateway;

/// Account fields ready for the wire. `password` is `None` on an update that
/// keeps the current password; form validation guarantees it is present on
/// create. An avatar may accompany either call, so both go out multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPayload {
    pub user_name: String,
    pub email: String,
    pub password: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub image: Option<ImageUpload>,
}

/// REST operations on console accounts.
#[async_trait]
pub trait UserGateway: BulkDeleteGateway<Entity = User> {
    async fn get(&self, id: &EntityId) -> Result<User, ApiFailure>;

    async fn create(&self, payload: &UserPayload) -> Result<User, ApiFailure>;

    async fn update(&self, id: &EntityId, payload: &UserPayload) -> Result<User, ApiFailure>;
}
