use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowForward};

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Shop - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                overflow: auto;
            ",
            div {
                style: "font-size: 40px; font-weight: 500; color: #0F172A; letter-spacing: -0.02em;",
                "Browse the catalog"
            }
            div {
                style: "font-size: 20px; color: rgba(0,0,0,0.7); max-width: 620px;",
                "Open a category to narrow its products by color, size, price and every other filter the category defines."
            }
            CategoryJumpBox {}
        }
    }
}

#[component]
fn CategoryJumpBox() -> Element {
    let mut category_id = use_signal(String::new);
    let can_open = use_memo(move || !category_id.read().trim().is_empty());
    let open_category = move |_: ()| {
        let id = category_id.read().trim().to_string();
        if !id.is_empty() {
            navigator().push(Route::CategoryPage { category_id: id });
        }
    };
    rsx! {
        div {
            id: "x-home-category-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 48px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                max-width: 100%;
            ",
            input {
                r#type: "text",
                placeholder: "Category id",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    font-size: 20px;
                ",
                value: "{category_id}",
                oninput: move |event: Event<FormData>| category_id.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        open_category(());
                    }
                },
            }
            button {
                disabled: !can_open(),
                style: "border: none; background: none; cursor: pointer; display: flex;",
                onclick: move |_| open_category(()),
                Icon { icon: MdArrowForward, style: "width: 24px; height: 24px; color: #4F46E5;" }
            }
        }
    }
}
