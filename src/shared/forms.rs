/// Field-level validation failures collected on a submit attempt. Validation
/// runs synchronously and a draft that fails never reaches a gateway.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(String, String)>,
}

impl FormErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push((field.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for a field, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Finish a validation pass: `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Require at least `min` characters after trimming.
    pub fn check_min(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.push(field, message);
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// What happened to a submitted draft. `Saved` means the mutation landed and
/// the owning page refetched; `Rejected` means the backend refused it and the
/// draft should stay open for correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Invalid(FormErrors),
    Rejected,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_min_records_message_once_per_field() {
        let mut errors = FormErrors::default();
        errors.check_min("title_en", " a ", 2, "Title (EN) is required");
        errors.check_min("title_ar", "صيانة", 2, "Title (AR) is required");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("title_en"), Some("Title (EN) is required"));
        assert_eq!(errors.message_for("title_ar"), None);
    }

    #[test]
    fn test_into_result_passes_clean_validation_through() {
        let errors = FormErrors::default();
        assert_eq!(errors.into_result(7), Ok(7));

        let mut errors = FormErrors::default();
        errors.push("email", "Invalid email address");
        let failed = errors.clone().into_result(7);
        assert_eq!(failed, Err(errors));
    }

    #[test]
    fn test_display_joins_field_messages() {
        let mut errors = FormErrors::default();
        errors.push("title_en", "Title (EN) is required");
        errors.push("order", "Order must be at least 1");
        assert_eq!(
            errors.to_string(),
            "title_en: Title (EN) is required; order: Order must be at least 1"
        );
    }
}
