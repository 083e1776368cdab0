/// One filter dimension. `All` contributes `true` unconditionally; filtering
/// across dimensions is a conjunction, so leaving every dimension on `All`
/// yields the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChoice<T> {
    All,
    Only(T),
}

impl<T> Default for FilterChoice<T> {
    fn default() -> Self {
        FilterChoice::All
    }
}

impl<T> FilterChoice<T> {
    pub fn matches<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            FilterChoice::All => true,
            FilterChoice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterChoice::All)
    }
}

/// Distinct non-empty values for populating a filter dropdown:
/// collect, de-duplicate by equality, sort lexicographically.
pub fn distinct_non_empty<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = values
        .into_iter()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect();
    distinct.sort();
    distinct.dedup();
    distinct
}
