use crate::modules::services::domain::entities::ServiceSection;

/// Header-card counts for the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Items across all sections.
    pub items: usize,
}

pub fn section_counts(sections: &[ServiceSection]) -> SectionCounts {
    let active = sections.iter().filter(|section| section.is_active).count();
    SectionCounts {
        total: sections.len(),
        active,
        inactive: sections.len() - active,
        items: sections.iter().map(|section| section.services.len()).sum(),
    }
}
