//! Min/max facet with staged input and explicit apply.

use dioxus::prelude::*;
use dioxus::logger::tracing;

use common::{filter_definition::FilterDefinition, filter_state::RangeValue, range_stage::{RangeApplyError, RangeStage, range_summary}};
use crate::components::filter_components::{dropdown_facet::FacetHeader, facet_list::FacetLayout};


/// Typing only edits the staged text; `on_commit` fires on "Apply" and
/// "Clear". An inverted or unparsable range is not committed and the reason
/// is shown under the inputs.
#[component]
pub fn RangeFacet(
    definition: ReadSignal<FilterDefinition>,
    committed: ReadSignal<RangeValue>,
    on_commit: Callback<RangeValue>,
    layout: FacetLayout,
) -> Element {
    let mut stage = use_signal(|| RangeStage::from_committed(&committed.read()));
    let mut apply_error = use_signal(|| None::<RangeApplyError>);
    // committed value changed from outside (e.g. "Clear All"): re-seed the inputs
    use_effect(move || {
        let committed = *committed.read();
        stage.set(RangeStage::from_committed(&committed));
        apply_error.set(None);
    });

    let summary = use_memo(move || range_summary(&committed.read(), definition.read().unit_label()));
    let can_apply = use_memo(move || !stage.read().is_empty());
    let title = definition.read().name.clone();
    let unit = definition.read().unit_label().to_string();
    let facet_padding = layout.facet_padding();

    let apply = move |_: Event<MouseData>| {
        let result = stage.read().apply();
        match result {
            Ok(Some(value)) => {
                apply_error.set(None);
                on_commit(value);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("range \"{}\" not applied: {e}", definition.peek().name);
                apply_error.set(Some(e));
            }
        }
    };
    let clear = move |_: ()| {
        let value = stage.write().clear();
        apply_error.set(None);
        on_commit(value);
    };

    rsx! {
        div {
            class: "x-range-facet",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: {facet_padding};
            ",
            FacetHeader {
                title,
                show_clear: !committed.read().is_unbounded() || can_apply(),
                on_clear: clear,
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                RangeInput {
                    placeholder: format!("Min {unit}"),
                    value: stage.read().min_text.clone(),
                    oninput: move |text: String| {
                        stage.write().min_text = text;
                        apply_error.set(None);
                    },
                }
                span { style: "color: rgba(0,0,0,0.5);", "-" }
                RangeInput {
                    placeholder: format!("Max {unit}"),
                    value: stage.read().max_text.clone(),
                    oninput: move |text: String| {
                        stage.write().max_text = text;
                        apply_error.set(None);
                    },
                }
                button {
                    disabled: !can_apply(),
                    style: "
                        border: none;
                        border-radius: 6px;
                        padding: 6px 12px;
                        background-color: #4F46E5;
                        color: white;
                        cursor: pointer;
                        flex-shrink: 0;
                    ",
                    onclick: apply,
                    "Apply"
                }
            }
            if let Some(e) = apply_error() {
                div {
                    style: "font-size: 13px; color: darkred;",
                    "{e}"
                }
            }
            if let Some(summary) = summary() {
                div {
                    style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);",
                    "{summary}"
                }
            }
        }
    }
}

#[component]
fn RangeInput(placeholder: String, value: String, oninput: Callback<String>) -> Element {
    rsx! {
        input {
            r#type: "number",
            placeholder: "{placeholder}",
            value: "{value}",
            style: "
                width: 0;
                flex: 1 1 auto;
                min-width: 60px;
                border: 1px solid rgba(101, 101, 101, 0.6);
                border-radius: 6px;
                padding: 6px 8px;
                font-size: 15px;
            ",
            oninput: move |event: Event<FormData>| oninput(event.value()),
        }
    }
}
