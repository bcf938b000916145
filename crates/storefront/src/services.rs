// File: src/services.rs
// Purpose: Collaborators injected into every request (customer account, storefront client)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::StorefrontConfig;

/// Customer account accessor
#[async_trait]
pub trait CustomerAccount: Send + Sync {
    /// Whether the current visitor is signed in
    async fn is_logged_in(&self) -> bool;
}

/// Storefront API client
pub trait StorefrontClient: Send + Sync {
    fn shop_name(&self) -> &str;

    fn store_domain(&self) -> &str;

    /// Serializable summary handed to loaders that expose the client
    fn info(&self) -> StorefrontInfo {
        StorefrontInfo {
            shop_name: self.shop_name().to_string(),
            store_domain: self.store_domain().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontInfo {
    pub shop_name: String,
    pub store_domain: String,
}

/// Customer account whose answer is fixed at construction
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCustomerAccount {
    logged_in: bool,
}

impl MockCustomerAccount {
    pub fn new(logged_in: bool) -> Self {
        Self { logged_in }
    }
}

#[async_trait]
impl CustomerAccount for MockCustomerAccount {
    async fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

/// Storefront client that never leaves the process
#[derive(Debug, Clone)]
pub struct MockStorefront {
    shop_name: String,
    store_domain: String,
}

impl MockStorefront {
    pub fn new(shop_name: impl Into<String>, store_domain: impl Into<String>) -> Self {
        Self {
            shop_name: shop_name.into(),
            store_domain: store_domain.into(),
        }
    }
}

impl Default for MockStorefront {
    fn default() -> Self {
        let config = StorefrontConfig::default();
        Self::new(config.shop_name, config.store_domain)
    }
}

impl StorefrontClient for MockStorefront {
    fn shop_name(&self) -> &str {
        &self.shop_name
    }

    fn store_domain(&self) -> &str {
        &self.store_domain
    }
}

/// Services available to loaders and actions through the request context
#[derive(Clone)]
pub struct Services {
    pub customer_account: Arc<dyn CustomerAccount>,
    pub storefront: Arc<dyn StorefrontClient>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("shop_name", &self.storefront.shop_name())
            .finish()
    }
}

impl Services {
    pub fn new(
        customer_account: Arc<dyn CustomerAccount>,
        storefront: Arc<dyn StorefrontClient>,
    ) -> Self {
        Self {
            customer_account,
            storefront,
        }
    }

    /// Mock services built from the `[storefront]` config section
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(
            Arc::new(MockCustomerAccount::new(config.customer_logged_in)),
            Arc::new(MockStorefront::new(&config.shop_name, &config.store_domain)),
        )
    }

    /// Mock services with default settings (signed out)
    pub fn mock() -> Self {
        Self::from_config(&StorefrontConfig::default())
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::mock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_customer_account() {
        assert!(!MockCustomerAccount::default().is_logged_in().await);
        assert!(MockCustomerAccount::new(true).is_logged_in().await);
    }

    #[test]
    fn test_storefront_info() {
        let info = MockStorefront::default().info();
        assert_eq!(info.shop_name, "My Shopify Store");
        assert_eq!(info.store_domain, "https://example.com");
    }

    #[test]
    fn test_storefront_info_serializes_camel_case() {
        let json = serde_json::to_value(MockStorefront::new("Shop", "https://shop.test").info()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"shopName": "Shop", "storeDomain": "https://shop.test"})
        );
    }

    #[tokio::test]
    async fn test_services_from_config() {
        let config = StorefrontConfig {
            customer_logged_in: true,
            ..StorefrontConfig::default()
        };
        let services = Services::from_config(&config);
        assert!(services.customer_account.is_logged_in().await);
    }
}
