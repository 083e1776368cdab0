use crate::modules::careers::application::ports::outgoing::CareerPayload;
use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::{EntityId, Localized};
use crate::shared::forms::FormErrors;

/// Draft state of the post/edit-job dialog. Every field is the plain text the
/// operator sees; responsibilities and requirements stay newline-joined here
/// and only become arrays in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerForm {
    pub title_en: String,
    pub title_ar: String,
    pub department_en: String,
    pub department_ar: String,
    pub location_en: String,
    pub location_ar: String,
    pub employment_type_en: String,
    pub employment_type_ar: String,
    pub short_description_en: String,
    pub short_description_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub responsibilities_en: String,
    pub responsibilities_ar: String,
    pub requirements_en: String,
    pub requirements_ar: String,
    pub is_active: bool,
    editing: Option<EntityId>,
}

impl Default for CareerForm {
    fn default() -> Self {
        Self {
            title_en: String::new(),
            title_ar: String::new(),
            department_en: String::new(),
            department_ar: String::new(),
            location_en: String::new(),
            location_ar: String::new(),
            employment_type_en: "Full-Time".to_string(),
            employment_type_ar: "دوام كامل".to_string(),
            short_description_en: String::new(),
            short_description_ar: String::new(),
            description_en: String::new(),
            description_ar: String::new(),
            responsibilities_en: String::new(),
            responsibilities_ar: String::new(),
            requirements_en: String::new(),
            requirements_ar: String::new(),
            is_active: true,
            editing: None,
        }
    }
}

impl CareerForm {
    /// Empty template for posting a new job.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the dialog from an existing posting.
    pub fn seed(career: &Career) -> Self {
        Self {
            title_en: career.title.en.clone(),
            title_ar: career.title.ar.clone(),
            department_en: career.department.en.clone(),
            department_ar: career.department.ar.clone(),
            location_en: career.location.en.clone(),
            location_ar: career.location.ar.clone(),
            employment_type_en: career.employment_type.en.clone(),
            employment_type_ar: career.employment_type.ar.clone(),
            short_description_en: optional_en(&career.short_description),
            short_description_ar: optional_ar(&career.short_description),
            description_en: optional_en(&career.description),
            description_ar: optional_ar(&career.description),
            responsibilities_en: join_lines(&career.responsibilities.en),
            responsibilities_ar: join_lines(&career.responsibilities.ar),
            requirements_en: join_lines(&career.requirements.en),
            requirements_ar: join_lines(&career.requirements.ar),
            is_active: career.is_active,
            editing: Some(career.id.clone()),
        }
    }

    /// Which posting this draft edits, if any. Submit picks create vs update
    /// from this.
    pub fn editing(&self) -> Option<&EntityId> {
        self.editing.as_ref()
    }

    pub fn validate(&self) -> Result<CareerPayload, FormErrors> {
        let mut errors = FormErrors::default();

        errors.check_min("title_en", &self.title_en, 2, "Title (EN) is required");
        errors.check_min("title_ar", &self.title_ar, 2, "Title (AR) is required");
        errors.check_min(
            "department_en",
            &self.department_en,
            2,
            "Department (EN) is required",
        );
        errors.check_min(
            "department_ar",
            &self.department_ar,
            2,
            "Department (AR) is required",
        );
        errors.check_min("location_en", &self.location_en, 2, "Location (EN) is required");
        errors.check_min("location_ar", &self.location_ar, 2, "Location (AR) is required");
        errors.check_min(
            "employmentType_en",
            &self.employment_type_en,
            2,
            "Type (EN) is required",
        );
        errors.check_min(
            "employmentType_ar",
            &self.employment_type_ar,
            2,
            "Type (AR) is required",
        );

        errors.into_result(CareerPayload {
            title: Localized::new(self.title_en.clone(), self.title_ar.clone()),
            department: Localized::new(self.department_en.clone(), self.department_ar.clone()),
            location: Localized::new(self.location_en.clone(), self.location_ar.clone()),
            employment_type: Localized::new(
                self.employment_type_en.clone(),
                self.employment_type_ar.clone(),
            ),
            short_description: Localized::new(
                self.short_description_en.clone(),
                self.short_description_ar.clone(),
            ),
            description: Localized::new(self.description_en.clone(), self.description_ar.clone()),
            responsibilities: Localized::new(
                split_lines(&self.responsibilities_en),
                split_lines(&self.responsibilities_ar),
            ),
            requirements: Localized::new(
                split_lines(&self.requirements_en),
                split_lines(&self.requirements_ar),
            ),
            is_active: self.is_active,
        })
    }
}

/// One entry per line; lines are trimmed and blank lines dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

fn optional_en(field: &Option<Localized<String>>) -> String {
    field.as_ref().map(|value| value.en.clone()).unwrap_or_default()
}

fn optional_ar(field: &Option<Localized<String>>) -> String {
    field.as_ref().map(|value| value.ar.clone()).unwrap_or_default()
}
