//! End-to-end behavior of the filter engine: widget updates, committed state
//! and the serialized product search query.

use common::{
    dropdown_selection::toggle_option,
    facet_widget::renderable_facets,
    filter_definition::FilterDefinition,
    filter_state::{FilterState, FilterValue, RangeValue},
    query_builder::{build_query_params, categorical_key, range_key_stem},
    range_stage::{RangeApplyError, RangeStage},
};

fn color() -> FilterDefinition {
    FilterDefinition::dropdown("f-color", "cat-1", "Color", vec!["Red", "Blue", "Green"])
}

fn price() -> FilterDefinition {
    FilterDefinition::range("f-price", "cat-1", "Price Range", Some("$"))
}

fn stage(min: &str, max: &str) -> RangeStage {
    RangeStage { min_text: min.to_string(), max_text: max.to_string() }
}

/// Commits the staged range the way the range widget does.
fn apply_range(state: &mut FilterState, name: &str, staged: &RangeStage) -> Result<(), RangeApplyError> {
    if let Some(value) = staged.apply()? {
        state.set_filter(name, value);
    }
    Ok(())
}

fn sample_states() -> Vec<FilterState> {
    let mut states = vec![FilterState::new()];

    let mut s = FilterState::new();
    s.set_filter("Color", Vec::<String>::new());
    s.set_filter("Price Range", RangeValue::default());
    states.push(s);

    let mut s = FilterState::new();
    s.set_filter("Color", vec!["Red".to_string()]);
    s.set_filter("Size", Vec::<String>::new());
    s.set_filter("Price Range", RangeValue::new(Some(0.0), None));
    s.set_filter("Weight", RangeValue::default());
    states.push(s);

    let mut s = FilterState::new();
    s.set_filter("Brand Name", vec!["Acme".to_string(), "Globex".to_string()]);
    s.set_filter("Battery Life", RangeValue::new(None, Some(12.5)));
    s.set_filter("Stale Facet", Vec::<String>::new());
    states.push(s);

    states
}

#[test]
fn selecting_two_colors_serializes_in_selection_order() {
    let def = color();
    let mut state = FilterState::new();

    let next = toggle_option(state.categorical(&def.name), "Red");
    state.set_filter(def.name.clone(), next);
    let next = toggle_option(state.categorical(&def.name), "Blue");
    state.set_filter(def.name.clone(), next);

    assert_eq!(state.categorical("Color"), ["Red".to_string(), "Blue".to_string()].as_slice());
    let params = build_query_params("cat-1", &state);
    assert_eq!(params.get("color"), Some("Red,Blue"));
    assert!(params.to_query_string().contains("color=Red,Blue"));
}

#[test]
fn inverted_price_range_is_not_applied() {
    let def = price();
    let mut state = FilterState::new();
    let before = state.clone();

    let result = apply_range(&mut state, &def.name, &stage("10", "5"));

    assert!(matches!(result, Err(RangeApplyError::InvertedBounds { .. })));
    assert_eq!(state, before);
    assert_eq!(state.range("Price Range"), RangeValue::default());
    let params = build_query_params("cat-1", &state);
    assert!(!params.contains_key("priceRangeMin"));
    assert!(!params.contains_key("priceRangeMax"));
}

#[test]
fn valid_price_range_is_applied() {
    let def = price();
    let mut state = FilterState::new();

    apply_range(&mut state, &def.name, &stage("10", "100")).unwrap();

    assert_eq!(state.range("Price Range"), RangeValue::new(Some(10.0), Some(100.0)));
    let query = build_query_params("cat-1", &state).to_query_string();
    assert!(query.contains("priceRangeMin=10&priceRangeMax=100"), "{query}");
}

#[test]
fn clear_all_leaves_only_category() {
    let mut state = FilterState::new();
    state.set_filter("Color", vec!["Red".to_string()]);
    state.set_filter("Size", vec!["M".to_string(), "L".to_string()]);
    state.set_filter("Price Range", RangeValue::new(Some(1.0), Some(2.0)));

    state.clear_filters();

    let params = build_query_params("cat-1", &state);
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["categoryId"]);
    assert_eq!(params.get("categoryId"), Some("cat-1"));
}

#[test]
fn unapplied_facets_never_serialize() {
    for state in sample_states() {
        let params = build_query_params("c", &state);
        for (name, value) in &state {
            let keys = match value {
                FilterValue::Categorical(_) => vec![categorical_key(name)],
                FilterValue::Range(_) => {
                    let stem = range_key_stem(name);
                    vec![format!("{stem}Min"), format!("{stem}Max")]
                }
            };
            if !value.is_applied() {
                for key in keys {
                    assert!(!params.contains_key(&key), "{key} present in {params}");
                }
            }
        }
        for (key, value) in params.pairs() {
            assert!(!value.is_empty(), "{key} serialized with empty value");
        }
    }
}

#[test]
fn inverted_ranges_never_change_state() {
    let cases = [("10", "5"), ("0.5", "0.1"), ("-1", "-2"), (" 100 ", "99.99")];
    for state in sample_states() {
        for (min, max) in cases {
            let mut after = state.clone();
            let result = apply_range(&mut after, "Price Range", &stage(min, max));
            assert!(result.is_err());
            assert_eq!(after, state);
        }
    }
}

#[test]
fn toggling_twice_is_identity() {
    let def = color();
    for state in sample_states() {
        for option in &def.options {
            let mut after = state.clone();
            for _ in 0..2 {
                let next = toggle_option(after.categorical(&def.name), option);
                after.set_filter(def.name.clone(), next);
            }
            assert!(after.applied_eq(&state), "{after:?} != {state:?}");
            assert_eq!(after.categorical(&def.name), state.categorical(&def.name));
            assert_eq!(after.active_count(), state.active_count());
            assert_eq!(build_query_params("c", &after), build_query_params("c", &state));
        }
    }
}

#[test]
fn active_count_matches_serialized_facets() {
    let mut state = FilterState::new();
    state.set_filter("Color", vec!["Red".to_string(), "Blue".to_string()]);
    state.set_filter("Size", Vec::<String>::new());
    state.set_filter("Price Range", RangeValue::new(Some(10.0), Some(100.0)));
    state.set_filter("Weight", RangeValue::new(None, Some(3.0)));
    state.set_filter("Depth", RangeValue::default());

    assert_eq!(state.active_count(), 4);
}

#[test]
fn text_facets_get_no_widget() {
    let defs = vec![color(), FilterDefinition::text("f-eng", "cat-1", "Engraving"), price()];
    let names = renderable_facets(&defs).into_iter().map(|(d, _)| d.name.clone()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Color", "Price Range"]);
}

#[test]
fn category_change_prunes_stale_entries() {
    let mut state = FilterState::new();
    state.set_filter("Color", vec!["Red".to_string()]);
    state.set_filter("Megapixels", vec!["12".to_string()]);

    let new_category = vec![color(), price()];
    state.retain_known(&new_category);

    assert!(state.get("Megapixels").is_none());
    assert_eq!(state.categorical("Color"), ["Red".to_string()].as_slice());
}
