use chrono::{DateTime, Utc};

use crate::shared::domain::{EntityId, ImageRef, Localized};
use crate::shared::listing::HasId;

/// Bilingual headline block of a service section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub title: Localized<String>,
    pub sub_title: Localized<String>,
    pub description: Localized<String>,
    pub image: Option<ImageRef>,
}

/// One service inside a section. `order` is whatever the editor typed;
/// duplicates and gaps are allowed and nothing re-sequences them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub id: Option<EntityId>,
    pub title: Localized<String>,
    pub category: Localized<String>,
    pub description: Localized<String>,
    pub image: Option<ImageRef>,
    pub custom_id: Option<String>,
    pub order: i32,
}

/// A service section: header plus its ordered items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSection {
    pub id: EntityId,
    pub header: SectionHeader,
    pub services: Vec<ServiceItem>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HasId for ServiceSection {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl ServiceSection {
    pub fn item(&self, item_id: &EntityId) -> Option<&ServiceItem> {
        self.services
            .iter()
            .find(|item| item.id.as_ref() == Some(item_id))
    }
}
