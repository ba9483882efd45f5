//! Multi-select checkbox facet.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdClose, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use common::{dropdown_selection::{is_selected, remove_option, toggle_option}, filter_definition::FilterDefinition};
use crate::components::filter_components::facet_list::FacetLayout;


/// Checked state is read from `selected` on every render; there is no local
/// copy of the selection. Every change commits the full new selection.
#[component]
pub fn DropdownFacet(
    definition: ReadSignal<FilterDefinition>,
    selected: ReadSignal<Vec<String>>,
    on_commit: Callback<Vec<String>>,
    layout: FacetLayout,
) -> Element {
    let has_selection = use_memo(move || !selected.read().is_empty());
    let title = definition.read().name.clone();
    let options = definition.read().options.clone();
    let chips = selected.read().clone();
    let facet_padding = layout.facet_padding();

    rsx! {
        div {
            class: "x-dropdown-facet",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: {facet_padding};
            ",
            FacetHeader {
                title,
                show_clear: has_selection(),
                on_clear: move |_| on_commit(Vec::new()),
            }

            // SELECTED CHIPS
            if has_selection() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for value in chips {
                        SelectedChip {
                            key: "{value}",
                            value: value.clone(),
                            on_remove: move |value: String| on_commit(remove_option(&selected.read(), &value)),
                        }
                    }
                }
            }

            // OPTIONS
            ul {
                style: "display: flex; flex-direction: column; gap: 2px;",
                for option in options {
                    li {
                        key: "{option}",
                        FacetCheckbox {
                            label: option.clone(),
                            checked: is_selected(&selected.read(), &option),
                            layout,
                            on_toggle: move |option: String| on_commit(toggle_option(&selected.read(), &option)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FacetHeader(title: String, show_clear: bool, on_clear: Callback<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
            ",
            h3 {
                style: "font-size: 16px; font-weight: 600; margin: 0; color: #0F172A;",
                "{title}"
            }
            if show_clear {
                button {
                    style: "
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: #4F46E5;
                        font-size: 13px;
                    ",
                    onclick: move |_| on_clear(()),
                    "Clear"
                }
            }
        }
    }
}

#[component]
fn SelectedChip(value: String, on_remove: Callback<String>) -> Element {
    let removed_value = value.clone();
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 2px 4px 2px 10px;
                border-radius: 1000px;
                border: 1px solid rgba(79, 70, 229, 0.6);
                background-color: rgba(79, 70, 229, 0.08);
                font-size: 13px;
            ",
            "{value}"
            button {
                title: "Remove {value}",
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                    display: flex;
                    padding: 0;
                ",
                onclick: move |_| on_remove(removed_value.clone()),
                Icon { icon: MdClose, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.7);" }
            }
        }
    }
}

#[component]
fn FacetCheckbox(label: String, checked: bool, layout: FacetLayout, on_toggle: Callback<String>) -> Element {
    let option_font_size = layout.option_font_size();
    let toggled_option = label.clone();
    rsx! {
        div {
            class: "x-facet-option",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                border-radius: 6px;
                align-items: center;
                font-size: {option_font_size};
            ",
            onclick: move |_| on_toggle(toggled_option.clone()),
            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #4F46E5; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{label}"
            }
        }
    }
}
