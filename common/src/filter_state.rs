//! Committed filter selections of a category page.

use std::collections::{BTreeMap, BTreeSet};

use crate::filter_definition::FilterDefinition;


/// Numeric bounds of a range facet. A missing end is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeValue {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeValue {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Selected options, in the order they were selected.
    Categorical(Vec<String>),
    Range(RangeValue),
}

impl FilterValue {
    /// Empty selections and unbounded ranges do not filter anything.
    pub fn is_applied(&self) -> bool {
        match self {
            FilterValue::Categorical(values) => !values.is_empty(),
            FilterValue::Range(range) => !range.is_unbounded(),
        }
    }

    /// Contribution of this value to the active filter badge.
    pub fn active_count(&self) -> usize {
        match self {
            FilterValue::Categorical(values) => values.len(),
            FilterValue::Range(range) => usize::from(!range.is_unbounded()),
        }
    }
}

impl From<RangeValue> for FilterValue {
    fn from(value: RangeValue) -> Self {
        FilterValue::Range(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::Categorical(value)
    }
}


/// Facet name to committed value.
///
/// Writes go through [`FilterState::set_filter`], which replaces the whole
/// value of one facet. Callers compute the new value themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    filters: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.filters.insert(name.into(), value.into());
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.filters.get(name)
    }

    /// Committed options of a dropdown facet, empty if nothing is selected.
    pub fn categorical(&self, name: &str) -> &[String] {
        match self.filters.get(name) {
            Some(FilterValue::Categorical(values)) => values,
            _ => &[],
        }
    }

    /// Committed bounds of a range facet, unbounded if nothing is set.
    pub fn range(&self, name: &str) -> RangeValue {
        match self.filters.get(name) {
            Some(FilterValue::Range(range)) => *range,
            _ => RangeValue::default(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.filters.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Number shown on the "filters" badge: one per selected option plus one
    /// per range with at least one bound.
    pub fn active_count(&self) -> usize {
        self.filters.values().map(FilterValue::active_count).sum()
    }

    /// Entries that filter something, in name order.
    pub fn applied(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.filters.iter().filter(|(_, value)| value.is_applied())
    }

    /// Equal when both states filter the same facets by the same values.
    /// An empty selection or unbounded range counts as absent.
    pub fn applied_eq(&self, other: &FilterState) -> bool {
        self.applied().eq(other.applied())
    }

    /// Drops entries that do not name one of `definitions`.
    /// Returns the number of removed entries.
    pub fn retain_known(&mut self, definitions: &[FilterDefinition]) -> usize {
        let known = definitions.iter().map(|d| d.name.as_str()).collect::<BTreeSet<_>>();
        let before = self.filters.len();
        self.filters.retain(|name, _| known.contains(name.as_str()));
        before - self.filters.len()
    }
}

impl<'a> IntoIterator for &'a FilterState {
    type Item = (&'a String, &'a FilterValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, FilterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
