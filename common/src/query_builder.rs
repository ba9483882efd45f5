//! Serializes committed filters into product search query parameters.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{filter_state::{FilterState, FilterValue}, range_stage::format_number};

pub const CATEGORY_ID_PARAM: &str = "categoryId";

// multi-value separator stays readable on the wire
const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b',').remove(b'-').remove(b'.').remove(b'_').remove(b'~');


/// Flat, ordered key/value pairs for the product search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `k1=v1&k2=v2`, percent-encoded except for `,`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", utf8_percent_encode(k, QUERY_VALUE_SET), utf8_percent_encode(v, QUERY_VALUE_SET)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}


/// Builds the search parameters for `category_id` and the committed filters.
///
/// Never fails. Facets that are not applied produce no key at all; entries
/// that no longer match a definition are serialized like any other.
pub fn build_query_params(category_id: &str, filters: &FilterState) -> QueryParams {
    let mut params = QueryParams::default();
    params.push(CATEGORY_ID_PARAM, category_id);

    for (name, value) in filters {
        match value {
            FilterValue::Categorical(values) => {
                if !values.is_empty() {
                    params.push(categorical_key(name), values.join(","));
                }
            }
            FilterValue::Range(range) => {
                let stem = range_key_stem(name);
                if let Some(min) = range.min {
                    params.push(format!("{stem}Min"), format_number(min));
                }
                if let Some(max) = range.max {
                    params.push(format!("{stem}Max"), format_number(max));
                }
            }
        }
    }
    params
}

/// `"Screen Size"` -> `"screen size"`.
pub fn categorical_key(name: &str) -> String {
    name.to_lowercase()
}

/// `"Price Range"` -> `"priceRange"`. Only the first word is lower-cased;
/// later words get an upper-case first letter and keep the rest as typed.
pub fn range_key_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for (i, word) in name.split_whitespace().enumerate() {
        if i == 0 {
            stem.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            stem.extend(first.to_uppercase());
            stem.push_str(chars.as_str());
        }
    }
    stem
}
