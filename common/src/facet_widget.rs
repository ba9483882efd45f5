//! Chooses the input widget of a facet from its filter type.

use crate::filter_definition::{FilterDefinition, FilterType};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetWidget {
    Dropdown,
    Range,
}

/// `None` for definitions no storefront widget consumes (`TEXT`).
pub fn facet_widget_for(definition: &FilterDefinition) -> Option<FacetWidget> {
    match definition.filter_type {
        FilterType::Dropdown => Some(FacetWidget::Dropdown),
        FilterType::Range => Some(FacetWidget::Range),
        FilterType::Text => None,
    }
}

/// Definitions that get a widget, in catalog order.
pub fn renderable_facets(definitions: &[FilterDefinition]) -> Vec<(&FilterDefinition, FacetWidget)> {
    definitions
        .iter()
        .filter_map(|d| facet_widget_for(d).map(|w| (d, w)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_definitions_have_no_widget() {
        let defs = vec![
            FilterDefinition::text("1", "c", "Engraving"),
            FilterDefinition::range("2", "c", "Price", Some("$")),
            FilterDefinition::dropdown("3", "c", "Color", vec!["Red"]),
        ];
        let facets = renderable_facets(&defs);
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].0.name, "Price");
        assert_eq!(facets[0].1, FacetWidget::Range);
        assert_eq!(facets[1].1, FacetWidget::Dropdown);
    }
}
