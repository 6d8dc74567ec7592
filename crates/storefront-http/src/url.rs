//! URL construction helpers for the storefront API.
//!
//! Pure functions building resource paths, plus the resolved endpoint that
//! turns a path into a full URL.

use storefront_core::{PageRequest, ProductId};
use url::Url;

use crate::error::HttpResult;

/// Resolved base URL and API prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
    prefix: String,
}

impl Endpoint {
    /// `base` must already be normalized (no trailing slash).
    pub fn new(base: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            prefix: prefix.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full URL for a resource path such as `/products/1`.
    pub fn url_for(&self, path: &str) -> HttpResult<Url> {
        Ok(Url::parse(&format!("{}{}{path}", self.base, self.prefix))?)
    }
}

/// Paged, sorted product listing.
pub fn products_list_path(request: &PageRequest) -> String {
    format!(
        "/products?page={}&size={}&sort={}",
        request.page,
        request.size,
        urlencoding::encode(&request.sort.to_string())
    )
}

pub fn products_path() -> &'static str {
    "/products"
}

pub fn product_path(id: ProductId) -> String {
    format!("/products/{id}")
}

pub fn stock_path(product_id: ProductId) -> String {
    format!("/stocks/{product_id}")
}

pub fn stock_adjust_path(product_id: ProductId) -> String {
    format!("/stocks/{product_id}/adjust")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{DEFAULT_SORT, SortSpec};

    #[test]
    fn test_list_path_encodes_sort() {
        let request = PageRequest::new(2, 20, "price,asc".parse::<SortSpec>().unwrap());
        assert_eq!(
            products_list_path(&request),
            "/products?page=2&size=20&sort=price%2Casc"
        );
    }

    #[test]
    fn test_list_path_default_sort() {
        let request = PageRequest::new(0, 20, DEFAULT_SORT);
        assert_eq!(
            products_list_path(&request),
            "/products?page=0&size=20&sort=id%2Cdesc"
        );
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(product_path(5), "/products/5");
        assert_eq!(stock_path(5), "/stocks/5");
        assert_eq!(stock_adjust_path(5), "/stocks/5/adjust");
    }

    #[test]
    fn test_endpoint_joins_base_prefix_and_path() {
        let endpoint = Endpoint::new("http://localhost:8080", "/api/v1");
        let url = endpoint.url_for("/products/3").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/products/3");
    }

    #[test]
    fn test_endpoint_with_empty_prefix_keeps_query() {
        let endpoint = Endpoint::new("https://shop.example.com/backend", "");
        let url = endpoint
            .url_for(&products_list_path(&PageRequest::new(1, 5, DEFAULT_SORT)))
            .unwrap();
        assert_eq!(url.path(), "/backend/products");
        assert_eq!(url.query(), Some("page=1&size=5&sort=id%2Cdesc"));
    }
}
