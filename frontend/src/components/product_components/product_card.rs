use dioxus::prelude::*;

use common::{product_search::Product, range_stage::format_number};


#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();
    let price = format_number(product.price);
    rsx! {
        div {
            class: "x-product-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background-color: white;
                border-radius: 12px;
                padding: 12px;
                height: 100%;
                box-shadow: 0 2px 8px 0 rgba(0, 0, 0, 0.08);
            ",
            if let Some(image_url) = product.image_url.clone() {
                img {
                    src: "{image_url}",
                    alt: "{product.name}",
                    style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover; border-radius: 8px;",
                }
            } else {
                div {
                    style: "width: 100%; aspect-ratio: 1 / 1; border-radius: 8px; background-color: #ECEEF2;",
                }
            }
            if let Some(brand) = product.brand.clone() {
                div {
                    style: "font-size: 13px; color: rgba(0,0,0,0.55); text-transform: uppercase; letter-spacing: 0.04em;",
                    "{brand}"
                }
            }
            div {
                style: "
                    font-size: 17px;
                    font-weight: 500;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{product.name}"
            }
            div {
                style: "font-size: 18px; font-weight: 600; color: #4F46E5;",
                "${price}"
            }
        }
    }
}
