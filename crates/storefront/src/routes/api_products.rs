// `api.products`: JSON resource route, no UI

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{now_iso, RouteModule};
use crate::error::RouteResult;
use crate::request_context::RequestContext;
use crate::response::{ResourceResponse, RouteOutput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsPayload {
    pub success: bool,
    pub products: Vec<ApiProduct>,
    pub total: usize,
    pub timestamp: String,
}

pub fn load(timestamp: String) -> ProductsPayload {
    let products: Vec<ApiProduct> = [29.99, 49.99, 79.99]
        .into_iter()
        .enumerate()
        .map(|(i, price)| ApiProduct {
            id: (i + 1).to_string(),
            name: format!("Product {}", i + 1),
            price,
        })
        .collect();

    ProductsPayload {
        success: true,
        total: products.len(),
        products,
        timestamp,
    }
}

pub struct ApiProducts;

#[async_trait]
impl RouteModule for ApiProducts {
    fn file(&self) -> &'static str {
        "api.products.tsx"
    }

    fn is_resource(&self) -> bool {
        true
    }

    async fn loader(&self, _ctx: &RequestContext) -> Option<RouteResult<RouteOutput>> {
        Some(
            ResourceResponse::json(&load(now_iso()))
                .map(|response| response.header("Cache-Control", "public, max-age=300").into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_payload() {
        let payload = load("now".to_string());
        assert!(payload.success);
        assert_eq!(payload.total, 3);
        assert_eq!(payload.products[1].name, "Product 2");
        assert_eq!(payload.products[2].price, 79.99);
    }
}
