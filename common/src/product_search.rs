//! Product search request and response models.

use serde::{Deserialize, Serialize};

use crate::{query_builder::QueryParams, search_const::PAGE_SIZE};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearchRequest {
    pub params: Vec<(String, String)>,
    /// 1-based.
    pub page: u64,
    pub limit: u64,
}

impl ProductSearchRequest {
    pub fn new(params: &QueryParams, page: u64) -> Self {
        Self { params: params.pairs().to_vec(), page: page.max(1), limit: PAGE_SIZE }
    }

    /// Filter params followed by `page` and `limit`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.params.clone();
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }
}


/// Page picked by the user, remembered together with the query it was picked
/// for. Any other query reads as page 1, so a filter change never fetches a
/// stale page number first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSelection {
    query: QueryParams,
    page: u64,
}

impl PageSelection {
    pub fn new(query: QueryParams, page: u64) -> Self {
        Self { query, page: page.max(1) }
    }

    /// 1-based page to request for `query`.
    pub fn page_for(&self, query: &QueryParams) -> u64 {
        if self.query == *query { self.page.max(1) } else { 1 }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl Default for ProductPage {
    fn default() -> Self {
        Self { products: vec![], total: 0, page: 1, limit: PAGE_SIZE }
    }
}

impl ProductPage {
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_state::FilterState, query_builder::build_query_params};

    #[test]
    fn page_selection_resets_for_other_query() {
        let mut state = FilterState::new();
        let unfiltered = build_query_params("c", &state);
        state.set_filter("Color", vec!["Red".to_string()]);
        let red = build_query_params("c", &state);

        let selection = PageSelection::new(unfiltered.clone(), 3);
        assert_eq!(selection.page_for(&unfiltered), 3);
        assert_eq!(selection.page_for(&red), 1);
        assert_eq!(PageSelection::default().page_for(&unfiltered), 1);
        assert_eq!(PageSelection::new(red.clone(), 0).page_for(&red), 1);
    }

    #[test]
    fn request_appends_pagination() {
        let params = build_query_params("c1", &FilterState::new());
        let request = ProductSearchRequest::new(&params, 0);
        assert_eq!(request.page, 1);
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("categoryId".to_string(), "c1".to_string()));
        assert_eq!(pairs[1], ("page".to_string(), "1".to_string()));
        assert_eq!(pairs[2], ("limit".to_string(), PAGE_SIZE.to_string()));
    }

    #[test]
    fn page_navigation_bounds() {
        let page = ProductPage { products: vec![], total: 25, page: 2, limit: 12 };
        assert_eq!(page.page_count(), 3);
        assert!(page.has_previous());
        assert!(page.has_next());
        let last = ProductPage { page: 3, ..page };
        assert!(!last.has_next());
    }

    #[test]
    fn partial_page_payload_uses_defaults() {
        let page: ProductPage = serde_json::from_str(r#"{"products": [{"id": "p1", "name": "Mug", "price": 9.5}], "total": 1}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.products[0].image_url, None);
    }
}
