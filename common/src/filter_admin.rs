//! Payloads for creating and updating filter definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter_definition::FilterType;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterFormError {
    #[error("filter name is empty")]
    EmptyName,
    #[error("filter \"{name}\" has no type")]
    MissingType { name: String },
    #[error("dropdown filter \"{name}\" has no options")]
    NoOptions { name: String },
}


/// Raw admin form input. `options` is typed as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefinitionForm {
    pub name: String,
    #[serde(rename = "type")]
    pub filter_type: Option<FilterType>,
    pub unit: String,
    pub options: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFilterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub unit: Option<String>,
}

/// Several definitions for one category in a single create call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilterDefinitions {
    pub category_id: String,
    pub filters: Vec<NewFilterDefinition>,
}

impl FilterDefinitionForm {
    /// Keeps `options` only for dropdowns and `unit` only for ranges.
    pub fn to_payload(&self) -> Result<NewFilterDefinition, FilterFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FilterFormError::EmptyName);
        }
        let Some(filter_type) = self.filter_type else {
            return Err(FilterFormError::MissingType { name: name.to_string() });
        };
        let options = match filter_type {
            FilterType::Dropdown => split_options(&self.options),
            FilterType::Range | FilterType::Text => vec![],
        };
        if filter_type == FilterType::Dropdown && options.is_empty() {
            return Err(FilterFormError::NoOptions { name: name.to_string() });
        }
        let unit = match filter_type {
            FilterType::Range => Some(self.unit.trim()).filter(|u| !u.is_empty()).map(str::to_string),
            FilterType::Dropdown | FilterType::Text => None,
        };
        Ok(NewFilterDefinition { name: name.to_string(), filter_type, options, unit })
    }
}

impl CreateFilterDefinitions {
    pub fn from_forms(category_id: impl Into<String>, forms: &[FilterDefinitionForm]) -> Result<Self, FilterFormError> {
        let filters = forms.iter().map(FilterDefinitionForm::to_payload).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { category_id: category_id.into(), filters })
    }
}

/// `"Red, Blue,,Green "` -> `["Red", "Blue", "Green"]`.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}
