use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::careers::application::ports::outgoing::CareerPayload;
use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::{EntityId, Localized};

/// Career record as the backend stores it: every bilingual field is a
/// `*_en`/`*_ar` twin.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
    pub department_en: String,
    pub department_ar: String,
    pub location_en: String,
    pub location_ar: String,
    #[serde(rename = "employmentType_en")]
    pub employment_type_en: String,
    #[serde(rename = "employmentType_ar")]
    pub employment_type_ar: String,
    #[serde(rename = "shortDescription_en", default)]
    pub short_description_en: Option<String>,
    #[serde(rename = "shortDescription_ar", default)]
    pub short_description_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub responsibilities_en: Vec<String>,
    #[serde(default)]
    pub responsibilities_ar: Vec<String>,
    #[serde(default)]
    pub requirements_en: Vec<String>,
    #[serde(default)]
    pub requirements_ar: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<CareerDto> for Career {
    fn from(dto: CareerDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            title: Localized::new(dto.title_en, dto.title_ar),
            department: Localized::new(dto.department_en, dto.department_ar),
            location: Localized::new(dto.location_en, dto.location_ar),
            employment_type: Localized::new(dto.employment_type_en, dto.employment_type_ar),
            short_description: optional_pair(dto.short_description_en, dto.short_description_ar),
            description: optional_pair(dto.description_en, dto.description_ar),
            responsibilities: Localized::new(dto.responsibilities_en, dto.responsibilities_ar),
            requirements: Localized::new(dto.requirements_en, dto.requirements_ar),
            is_active: dto.is_active,
            order: dto.order,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// A pair where either locale may be missing server-side; absent sides come
/// back as empty strings, and a fully absent pair collapses to `None`.
fn optional_pair(en: Option<String>, ar: Option<String>) -> Option<Localized<String>> {
    if en.is_none() && ar.is_none() {
        return None;
    }
    Some(Localized::new(en.unwrap_or_default(), ar.unwrap_or_default()))
}

/// Outbound career fields, flattened back to the twin-field wire shape.
#[derive(Debug, Serialize)]
pub struct CareerPayloadDto {
    pub title_en: String,
    pub title_ar: String,
    pub department_en: String,
    pub department_ar: String,
    pub location_en: String,
    pub location_ar: String,
    #[serde(rename = "employmentType_en")]
    pub employment_type_en: String,
    #[serde(rename = "employmentType_ar")]
    pub employment_type_ar: String,
    #[serde(rename = "shortDescription_en")]
    pub short_description_en: String,
    #[serde(rename = "shortDescription_ar")]
    pub short_description_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub responsibilities_en: Vec<String>,
    pub responsibilities_ar: Vec<String>,
    pub requirements_en: Vec<String>,
    pub requirements_ar: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl From<&CareerPayload> for CareerPayloadDto {
    fn from(payload: &CareerPayload) -> Self {
        Self {
            title_en: payload.title.en.clone(),
            title_ar: payload.title.ar.clone(),
            department_en: payload.department.en.clone(),
            department_ar: payload.department.ar.clone(),
            location_en: payload.location.en.clone(),
            location_ar: payload.location.ar.clone(),
            employment_type_en: payload.employment_type.en.clone(),
            employment_type_ar: payload.employment_type.ar.clone(),
            short_description_en: payload.short_description.en.clone(),
            short_description_ar: payload.short_description.ar.clone(),
            description_en: payload.description.en.clone(),
            description_ar: payload.description.ar.clone(),
            responsibilities_en: payload.responsibilities.en.clone(),
            responsibilities_ar: payload.responsibilities.ar.clone(),
            requirements_en: payload.requirements.en.clone(),
            requirements_ar: payload.requirements.ar.clone(),
            is_active: payload.is_active,
        }
    }
}

// List/detail responses arrive either wrapped (`{careers: [...]}`) or bare,
// depending on the backend version in front of the console.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CareerListBody {
    Wrapped { careers: Vec<CareerDto> },
    Bare(Vec<CareerDto>),
}

impl CareerListBody {
    pub fn into_careers(self) -> Vec<CareerDto> {
        match self {
            CareerListBody::Wrapped { careers } => careers,
            CareerListBody::Bare(careers) => careers,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CareerBody {
    Wrapped { career: CareerDto },
    Bare(CareerDto),
}

impl CareerBody {
    pub fn into_career(self) -> CareerDto {
        match self {
            CareerBody::Wrapped { career } => career,
            CareerBody::Bare(career) => career,
        }
    }
}
