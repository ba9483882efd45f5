//! Store API calls against a local `wiremock` server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use backend::api::filters::{create_filter_definitions, list_filter_definitions, update_filter_definition};
use backend::api::products::search_products;
use backend::store_api_utils::store_api_config::StoreApiConfig;
use common::{
    filter_admin::{CreateFilterDefinitions, FilterDefinitionForm},
    filter_definition::{FilterDefinition, FilterType},
    filter_state::{FilterState, RangeValue},
    product_search::ProductSearchRequest,
    query_builder::build_query_params,
};

fn config(server: &MockServer) -> StoreApiConfig {
    StoreApiConfig::new(format!("{}/api", server.uri()))
}

#[tokio::test]
async fn lists_definitions_for_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/filters"))
        .and(query_param("categoryId", "cat-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "f1", "categoryId": "cat-1", "name": "Color", "type": "DROPDOWN", "options": ["Red", "Blue"]},
            {"id": "f2", "categoryId": "cat-1", "name": "Price Range", "type": "RANGE", "unit": "$"},
            {"id": "f9", "categoryId": "cat-2", "name": "Stale", "type": "DROPDOWN", "options": ["x"]}
        ])))
        .mount(&server)
        .await;

    let definitions = list_filter_definitions(&config(&server), "cat-1".to_string()).await.unwrap();

    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0], FilterDefinition::dropdown("f1", "cat-1", "Color", vec!["Red", "Blue"]));
    assert_eq!(definitions[1].filter_type, FilterType::Range);
}

#[tokio::test]
async fn catalog_error_status_is_propagated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/filters"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;

    let result = list_filter_definitions(&config(&server), "cat-1".to_string()).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("503"), "{err}");
    assert!(err.contains("down for maintenance"), "{err}");
}

#[tokio::test]
async fn catalog_invalid_json_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/filters"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert!(list_filter_definitions(&config(&server), "cat-1".to_string()).await.is_err());
}

#[tokio::test]
async fn search_sends_filter_params_and_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/search"))
        .and(query_param("categoryId", "cat-1"))
        .and(query_param("color", "Red,Blue"))
        .and(query_param("priceRangeMin", "10"))
        .and(query_param("priceRangeMax", "100"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": "p1", "name": "Red Mug", "price": 12.5, "imageUrl": "https://cdn/p1.png"}],
            "total": 13,
            "page": 2,
            "limit": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = FilterState::new();
    state.set_filter("Color", vec!["Red".to_string(), "Blue".to_string()]);
    state.set_filter("Price Range", RangeValue::new(Some(10.0), Some(100.0)));
    let request = ProductSearchRequest::new(&build_query_params("cat-1", &state), 2);

    let page = search_products(&config(&server), request).await.unwrap();

    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].image_url.as_deref(), Some("https://cdn/p1.png"));
    assert_eq!(page.page_count(), 2);
    assert!(!page.has_next());
}

#[tokio::test]
async fn bulk_create_posts_one_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/filters"))
        .and(body_json(json!({
            "categoryId": "cat-1",
            "filters": [
                {"name": "Color", "type": "DROPDOWN", "options": ["Red", "Blue"]},
                {"name": "Weight", "type": "RANGE", "unit": "kg"}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": "f1", "categoryId": "cat-1", "name": "Color", "type": "DROPDOWN", "options": ["Red", "Blue"]},
            {"id": "f2", "categoryId": "cat-1", "name": "Weight", "type": "RANGE", "unit": "kg"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let forms = vec![
        FilterDefinitionForm { name: "Color".to_string(), filter_type: Some(FilterType::Dropdown), unit: String::new(), options: "Red, Blue".to_string() },
        FilterDefinitionForm { name: "Weight".to_string(), filter_type: Some(FilterType::Range), unit: "kg".to_string(), options: String::new() },
    ];
    let payload = CreateFilterDefinitions::from_forms("cat-1", &forms).unwrap();

    let created = create_filter_definitions(&config(&server), payload).await.unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1].unit.as_deref(), Some("kg"));
}

#[tokio::test]
async fn bulk_create_without_filters_is_rejected_locally() {
    let server = MockServer::start().await;
    let payload = CreateFilterDefinitions { category_id: "cat-1".to_string(), filters: vec![] };
    assert!(create_filter_definitions(&config(&server), payload).await.is_err());
}

#[tokio::test]
async fn update_puts_single_definition() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/filters/f2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "f2", "categoryId": "cat-1", "name": "Price", "type": "RANGE", "unit": "€"}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let form = FilterDefinitionForm { name: "Price".to_string(), filter_type: Some(FilterType::Range), unit: "€".to_string(), options: String::new() };
    let updated = update_filter_definition(&config(&server), "f2".to_string(), form.to_payload().unwrap()).await.unwrap();
    assert_eq!(updated.unit.as_deref(), Some("€"));
}
