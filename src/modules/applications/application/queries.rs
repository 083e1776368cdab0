use crate::modules::applications::domain::entities::{Application, ApplicationStatus};
use crate::shared::domain::EntityId;
use crate::shared::listing::{distinct_non_empty, FilterChoice};

/// Applications-page filter state: by job posting and by review status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub career: FilterChoice<EntityId>,
    pub status: FilterChoice<ApplicationStatus>,
}

pub fn filter_applications<'a>(
    applications: &'a [Application],
    filter: &ApplicationFilter,
) -> Vec<&'a Application> {
    applications
        .iter()
        .filter(|application| {
            filter.career.matches(application.career.id())
                && filter.status.matches(&application.status)
        })
        .collect()
}

/// Job titles for the filter dropdown; only populated references contribute.
pub fn distinct_career_titles(applications: &[Application]) -> Vec<String> {
    distinct_non_empty(
        applications
            .iter()
            .filter_map(|application| application.career.title_en()),
    )
}

/// Per-status tallies, full re-scan per render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub reviewed: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.reviewed + self.accepted + self.rejected
    }
}

pub fn status_counts(applications: &[Application]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for application in applications {
        match application.status {
            ApplicationStatus::Pending => counts.pending += 1,
            ApplicationStatus::Reviewed => counts.reviewed += 1,
            ApplicationStatus::Accepted => counts.accepted += 1,
            ApplicationStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}
