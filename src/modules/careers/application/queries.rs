use crate::modules::careers::domain::entities::Career;
use crate::shared::listing::{distinct_non_empty, FilterChoice};

/// Careers-page filter state. Text dimensions match on the English value,
/// which is what populates the dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerFilter {
    pub department: FilterChoice<String>,
    pub location: FilterChoice<String>,
    pub active: FilterChoice<bool>,
}

/// Conjunction across the active dimensions; `All` dimensions pass everything.
pub fn filter_careers<'a>(careers: &'a [Career], filter: &CareerFilter) -> Vec<&'a Career> {
    careers
        .iter()
        .filter(|career| {
            filter.department.matches(career.department.en.as_str())
                && filter.location.matches(career.location.en.as_str())
                && filter.active.matches(&career.is_active)
        })
        .collect()
}

pub fn distinct_departments(careers: &[Career]) -> Vec<String> {
    distinct_non_empty(careers.iter().map(|career| career.department.en.as_str()))
}

pub fn distinct_locations(careers: &[Career]) -> Vec<String> {
    distinct_non_empty(careers.iter().map(|career| career.location.en.as_str()))
}

/// Header-card counts, recomputed by full scan on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub fn career_counts(careers: &[Career]) -> CareerCounts {
    let active = careers.iter().filter(|career| career.is_active).count();
    CareerCounts {
        total: careers.len(),
        active,
        inactive: careers.len() - active,
    }
}
