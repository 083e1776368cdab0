use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::users::domain::entities::{User, UserRole};
use crate::shared::domain::{EntityId, ImageRef};

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            user_name: dto.user_name,
            email: dto.email,
            role: dto.role,
            is_active: dto.is_active,
            image: dto.image,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

// User endpoints wrap their results: `{users: [...]}` and `{user: {...}}`.
#[derive(Debug, Deserialize)]
pub struct UserListBody {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub user: UserDto,
}
