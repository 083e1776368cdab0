use chrono::{DateTime, Utc};

use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::EntityId;
use crate::shared::listing::HasId;

/// Review pipeline state of an application. The backend enforces no
/// transition order; any status is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// The literal word the backend stores and expects in status PATCHes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(ApplicationStatus::Pending),
            "Reviewed" => Ok(ApplicationStatus::Reviewed),
            "Accepted" => Ok(ApplicationStatus::Accepted),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status: {0}")]
pub struct UnknownStatus(pub String);

/// The career an application points at. The backend sometimes populates the
/// full posting and sometimes sends a bare id; the two cases are distinct
/// here, and reading career fields requires an explicitly resolved value.
#[derive(Debug, Clone, PartialEq)]
pub enum CareerRef {
    Unresolved(EntityId),
    Resolved(Box<Career>),
}

impl CareerRef {
    /// The referenced posting's id, available in both states.
    pub fn id(&self) -> &EntityId {
        match self {
            CareerRef::Unresolved(id) => id,
            CareerRef::Resolved(career) => &career.id,
        }
    }

    pub fn resolved(&self) -> Option<&Career> {
        match self {
            CareerRef::Unresolved(_) => None,
            CareerRef::Resolved(career) => Some(career),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CareerRef::Resolved(_))
    }

    /// English title when populated; columns show a placeholder otherwise.
    pub fn title_en(&self) -> Option<&str> {
        self.resolved().map(|career| career.title.en.as_str())
    }
}

/// A submitted job application. Applications are created on the public site;
/// the console only reads them, moves their status, and deletes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: EntityId,
    pub career: CareerRef,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cv: CvFile,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl HasId for Application {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Stored CV upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    pub file_url: String,
    pub public_id: String,
}
