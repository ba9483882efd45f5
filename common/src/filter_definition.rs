//! Filter definitions served by the category filter catalog.

use serde::{Deserialize, Serialize};


/// Widget and serialization rule of a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterType {
    Dropdown,
    Range,
    Text,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Dropdown => "DROPDOWN",
            FilterType::Range => "RANGE",
            FilterType::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


/// One facet of a category, as returned by the catalog query.
///
/// `name` is also the key of the facet in [`crate::filter_state::FilterState`].
/// `options` only means something for [`FilterType::Dropdown`], `unit` only for
/// [`FilterType::Range`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDefinition {
    pub id: String,
    pub category_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl FilterDefinition {
    pub fn dropdown(id: impl Into<String>, category_id: impl Into<String>, name: impl Into<String>, options: Vec<impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            filter_type: FilterType::Dropdown,
            options: options.into_iter().map(|s| s.into()).collect(),
            unit: None,
        }
    }

    pub fn range(id: impl Into<String>, category_id: impl Into<String>, name: impl Into<String>, unit: Option<impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            filter_type: FilterType::Range,
            options: vec![],
            unit: unit.map(|u| u.into()),
        }
    }

    pub fn text(id: impl Into<String>, category_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            filter_type: FilterType::Text,
            options: vec![],
            unit: None,
        }
    }

    /// Unit label for display, empty when the definition has none.
    pub fn unit_label(&self) -> &str {
        match self.filter_type {
            FilterType::Range => self.unit.as_deref().unwrap_or(""),
            FilterType::Dropdown | FilterType::Text => "",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_payload() {
        let json = r#"[
            {"id": "f1", "categoryId": "c9", "name": "Color", "type": "DROPDOWN", "options": ["Red", "Blue"]},
            {"id": "f2", "categoryId": "c9", "name": "Price Range", "type": "RANGE", "unit": "$"},
            {"id": "f3", "categoryId": "c9", "name": "Engraving", "type": "TEXT"}
        ]"#;
        let defs: Vec<FilterDefinition> = serde_json::from_str(json).unwrap();
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0], FilterDefinition::dropdown("f1", "c9", "Color", vec!["Red", "Blue"]));
        assert_eq!(defs[1], FilterDefinition::range("f2", "c9", "Price Range", Some("$")));
        assert_eq!(defs[2].filter_type, FilterType::Text);
        assert!(defs[2].options.is_empty());
    }

    #[test]
    fn rejects_unknown_filter_type() {
        let json = r#"{"id": "f1", "categoryId": "c9", "name": "Color", "type": "SLIDER"}"#;
        assert!(serde_json::from_str::<FilterDefinition>(json).is_err());
    }

    #[test]
    fn unit_label_only_for_ranges() {
        let mut def = FilterDefinition::range("f2", "c9", "Weight", Some("kg"));
        assert_eq!(def.unit_label(), "kg");
        def.filter_type = FilterType::Dropdown;
        assert_eq!(def.unit_label(), "");
        assert_eq!(FilterDefinition::range("f3", "c9", "Weight", None::<String>).unit_label(), "");
    }

    #[test]
    fn serializes_type_tag_upper_case() {
        let def = FilterDefinition::text("f3", "c9", "Engraving");
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["type"], "TEXT");
        assert_eq!(value["categoryId"], "c9");
        assert!(value.get("unit").is_none());
    }
}
