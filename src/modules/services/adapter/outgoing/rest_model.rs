use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::services::domain::entities::{SectionHeader, ServiceItem, ServiceSection};
use crate::shared::domain::{EntityId, ImageRef, Localized};

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSectionDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub header: SectionHeaderDto,
    #[serde(default)]
    pub services: Vec<ServiceItemDto>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionHeaderDto {
    pub title_en: String,
    pub title_ar: String,
    pub sub_title_en: String,
    pub sub_title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceItemDto {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub title_en: String,
    pub title_ar: String,
    pub category_en: String,
    pub category_ar: String,
    pub description_en: String,
    pub description_ar: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(rename = "customId", default)]
    pub custom_id: Option<String>,
    pub order: i32,
}

impl From<ServiceSectionDto> for ServiceSection {
    fn from(dto: ServiceSectionDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            header: SectionHeader {
                title: Localized::new(dto.header.title_en, dto.header.title_ar),
                sub_title: Localized::new(dto.header.sub_title_en, dto.header.sub_title_ar),
                description: Localized::new(dto.header.description_en, dto.header.description_ar),
                image: dto.header.image,
            },
            services: dto.services.into_iter().map(ServiceItem::from).collect(),
            is_active: dto.is_active,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<ServiceItemDto> for ServiceItem {
    fn from(dto: ServiceItemDto) -> Self {
        Self {
            id: dto.id.map(EntityId::from),
            title: Localized::new(dto.title_en, dto.title_ar),
            category: Localized::new(dto.category_en, dto.category_ar),
            description: Localized::new(dto.description_en, dto.description_ar),
            image: dto.image,
            custom_id: dto.custom_id,
            order: dto.order,
        }
    }
}

// Section list/detail come back wrapped (`{services: [...]}` / `{service}`)
// or bare; item mutations use a `{success, message, data}` envelope carrying
// the updated parent section.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SectionListBody {
    Wrapped { services: Vec<ServiceSectionDto> },
    Bare(Vec<ServiceSectionDto>),
}

impl SectionListBody {
    pub fn into_sections(self) -> Vec<ServiceSectionDto> {
        match self {
            SectionListBody::Wrapped { services } => services,
            SectionListBody::Bare(services) => services,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
    Wrapped { service: ServiceSectionDto },
    Bare(ServiceSectionDto),
}

impl SectionBody {
    pub fn into_section(self) -> ServiceSectionDto {
        match self {
            SectionBody::Wrapped { service } => service,
            SectionBody::Bare(service) => service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemMutationBody {
    pub data: ServiceSectionDto,
}
