//! Product resource client.

use storefront_core::{NewProduct, Page, PageRequest, Product, ProductId, ProductPatch};

use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::transport::{RequestBody, RequestOptions, Transport};
use crate::url::{product_path, products_list_path, products_path};

/// Client for `/products`.
pub struct ProductClient<B: HttpBackend> {
    transport: Transport<B>,
}

impl<B: HttpBackend> ProductClient<B> {
    pub(crate) const fn new(transport: Transport<B>) -> Self {
        Self { transport }
    }

    pub(crate) const fn transport(&self) -> &Transport<B> {
        &self.transport
    }

    /// Fetch one page, normalizing the backend's pagination metadata.
    pub(crate) async fn list_page(&self, request: &PageRequest) -> HttpResult<Page<Product>> {
        let page: Page<Product> = self
            .transport
            .request(&products_list_path(request), RequestOptions::get())
            .await?;
        Ok(page.normalized())
    }

    pub(crate) async fn get_product(&self, id: ProductId) -> HttpResult<Product> {
        self.transport
            .request(&product_path(id), RequestOptions::get())
            .await
    }

    pub(crate) async fn create_product(&self, product: &NewProduct) -> HttpResult<Product> {
        let body = RequestBody::json(product)?;
        self.transport
            .request(products_path(), RequestOptions::post(body))
            .await
    }

    /// PATCH with only the fields present in `patch`.
    pub(crate) async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> HttpResult<Product> {
        let body = RequestBody::json(patch)?;
        self.transport
            .request(&product_path(id), RequestOptions::patch(body))
            .await
    }

    pub(crate) async fn delete_product(&self, id: ProductId) -> HttpResult<()> {
        self.transport
            .request_unit(&product_path(id), RequestOptions::delete())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{fake_api, product_json};
    use crate::error::HttpError;
    use crate::http::Method;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;
    use storefront_core::{DEFAULT_SORT, NewProduct, PageRequest, ProductPatch};

    #[tokio::test]
    async fn test_list_page_unwraps_and_normalizes() {
        let backend = FakeBackend::new().with_response(
            "GET http://localhost:8080/api/v1/products?page=0&size=20&sort=id%2Cdesc",
            CannedResponse::json(
                200,
                json!({
                    "success": true,
                    "data": {
                        "content": [],
                        "number": 0,
                        "size": 20,
                        "totalElements": 0,
                        "totalPages": 0
                    }
                }),
            ),
        );
        let api = fake_api(backend);

        let page = api
            .products()
            .list_page(&PageRequest::new(0, 20, DEFAULT_SORT))
            .await
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_get_product() {
        let backend = FakeBackend::new().with_response(
            "/products/2",
            CannedResponse::json(200, json!({"success": true, "data": product_json(2, "Hoodie", 39900)})),
        );
        let api = fake_api(backend);

        let product = api.products().get_product(2).await.unwrap();
        assert_eq!(product.name, "Hoodie");
        assert_eq!(product.created_at, "2024-05-01T10:00:00");
        assert!(product.description.is_none());
    }

    #[tokio::test]
    async fn test_create_posts_json_body() {
        let backend = FakeBackend::new().with_response(
            "POST http://localhost:8080/api/v1/products",
            CannedResponse::json(201, json!({"success": true, "data": product_json(4, "Cap", 9900)})),
        );
        let log = backend.request_log();
        let api = fake_api(backend);

        let created = api
            .products()
            .create_product(&NewProduct::new("Cap", 9900))
            .await
            .unwrap();
        assert_eq!(created.id, 4);

        let requests = log.lock().unwrap();
        let sent: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "Cap", "price": 9900}));
    }

    #[tokio::test]
    async fn test_update_sends_only_changed_fields() {
        let backend = FakeBackend::new().with_response(
            "PATCH http://localhost:8080/api/v1/products/2",
            CannedResponse::json(200, json!({"success": true, "data": product_json(2, "Hoodie", 29900)})),
        );
        let log = backend.request_log();
        let api = fake_api(backend);

        let patch = ProductPatch {
            price: Some(29900),
            ..Default::default()
        };
        let updated = api.products().update_product(2, &patch).await.unwrap();
        assert_eq!(updated.price, 29900);

        let requests = log.lock().unwrap();
        assert_eq!(requests[0].method, Method::Patch);
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"price":29900}"#));
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let backend = FakeBackend::new()
            .with_response("DELETE http://localhost:8080/api/v1/products/3", CannedResponse::no_content());
        let api = fake_api(backend);

        api.products().delete_product(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_validation_failure_surfaces_backend_message() {
        let backend = FakeBackend::new().with_response(
            "POST",
            CannedResponse::json(
                400,
                json!({"success": false, "error": {"code": "VALIDATION_ERROR", "message": "name: must not be blank"}}),
            ),
        );
        let api = fake_api(backend);

        let err = api
            .products()
            .create_product(&NewProduct::new(" ", 1))
            .await
            .unwrap_err();
        match err {
            HttpError::Api { status, code, message } => {
                assert_eq!(status, 400);
                assert_eq!(code.as_deref(), Some("VALIDATION_ERROR"));
                assert_eq!(message, "name: must not be blank");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
