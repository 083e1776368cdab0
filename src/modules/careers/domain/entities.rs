use chrono::{DateTime, Utc};

use crate::shared::domain::{EntityId, Localized};
use crate::shared::listing::HasId;

/// A job posting. Free-text fields are bilingual pairs; responsibilities and
/// requirements are bilingual line lists. `order` is caller-assigned and the
/// backend permits duplicates and gaps, so nothing here re-sequences it.
#[derive(Debug, Clone, PartialEq)]
pub struct Career {
    pub id: EntityId,
    pub title: Localized<String>,
    pub department: Localized<String>,
    pub location: Localized<String>,
    pub employment_type: Localized<String>,
    pub short_description: Option<Localized<String>>,
    pub description: Option<Localized<String>>,
    pub responsibilities: Localized<Vec<String>>,
    pub requirements: Localized<Vec<String>>,
    pub is_active: bool,
    pub order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HasId for Career {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
