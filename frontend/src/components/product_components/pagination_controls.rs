//! Previous/next page buttons for the product list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::components::product_components::product_results_view::ProductResultsState;


#[component]
pub fn PaginationControls() -> Element {
    let results_state = use_context::<ProductResultsState>();
    let current_page = results_state.current_page;
    let set_current_page = results_state.set_current_page;

    let page_count = use_memo(move || {
        let search_result = results_state.search_result.read();
        match search_result.as_ref() {
            Some(Ok(page)) => page.page_count(),
            _ => 0,
        }
    });
    let can_go_to_previous_page = use_memo(move || current_page() > 1);
    let can_go_to_next_page = use_memo(move || current_page() < page_count());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            PageButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| set_current_page(current_page() - 1),
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    background-color: white;
                    border-radius: 2px;
                    padding: 4px 14px;
                ",
                "{current_page}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{page_count}"
                }
            }
            PageButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| set_current_page(current_page() + 1),
            }
        }
    }
}

#[component]
fn PageButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
