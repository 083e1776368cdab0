use serde::{Deserialize, Serialize};

/// A field group that exists in both English and Arabic. Backend records keep
/// the two locales as `*_en`/`*_ar` twins with nothing forcing them to stay in
/// sync; pairing them in one record makes "every field has both locales" hold
/// by construction. Wire flattening happens in the REST adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, ar: T) -> Self {
        Self { en, ar }
    }

    pub fn as_ref(&self) -> Localized<&T> {
        Localized {
            en: &self.en,
            ar: &self.ar,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Localized<U> {
        Localized {
            en: f(self.en),
            ar: f(self.ar),
        }
    }
}

impl Localized<String> {
    /// True when both locales are empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }
}

impl<T> From<(T, T)> for Localized<T> {
    fn from((en, ar): (T, T)) -> Self {
        Self { en, ar }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_applies_to_both_locales() {
        let titles = Localized::new("Maintenance".to_string(), "صيانة".to_string());
        let lengths = titles.map(|t| t.chars().count());
        assert_eq!(lengths, Localized::new(11, 5));
    }

    #[test]
    fn test_is_blank_requires_both_sides_empty() {
        assert!(Localized::new("  ".to_string(), String::new()).is_blank());
        assert!(!Localized::new(String::new(), "صيانة".to_string()).is_blank());
    }
}
