use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::applications::domain::entities::{
    Application, ApplicationStatus, CareerRef, CvFile,
};
use crate::modules::careers::adapter::outgoing::rest_model::CareerDto;
use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::EntityId;

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub career: CareerRefDto,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cv: CvFileDto,
    pub status: StatusDto,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// `career` arrives either populated or as a bare id string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CareerRefDto {
    Populated(Box<CareerDto>),
    Id(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CvFileDto {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub public_id: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum StatusDto {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl From<StatusDto> for ApplicationStatus {
    fn from(dto: StatusDto) -> Self {
        match dto {
            StatusDto::Pending => ApplicationStatus::Pending,
            StatusDto::Reviewed => ApplicationStatus::Reviewed,
            StatusDto::Accepted => ApplicationStatus::Accepted,
            StatusDto::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationDto> for Application {
    fn from(dto: ApplicationDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            career: match dto.career {
                CareerRefDto::Populated(career) => {
                    CareerRef::Resolved(Box::new(Career::from(*career)))
                }
                CareerRefDto::Id(id) => CareerRef::Unresolved(EntityId::from(id)),
            },
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            cv: CvFile {
                file_url: dto.cv.file_url,
                public_id: dto.cv.public_id,
            },
            status: dto.status.into(),
            created_at: dto.created_at,
        }
    }
}

// Application endpoints wrap their results: `{applications: [...]}` and
// `{application: {...}}`.
#[derive(Debug, Deserialize)]
pub struct ApplicationListBody {
    pub applications: Vec<ApplicationDto>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationBody {
    pub application: ApplicationDto,
}
