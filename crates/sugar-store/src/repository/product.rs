//! # Product Repository
//!
//! Mock data access for catalog products.
//!
//! ## Key Operations
//! - CRUD over the in-memory product list
//! - Category and supplier filters
//! - Substring search
//! - Low-stock listing for the dashboard
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Product Search Works                             │
//! │                                                                         │
//! │  User types: "choco"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Lowercased substring match across: name, sku, description             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ products (Vec scan)                     │                           │
//! │  │                                         │                           │
//! │  │ CHOC-001 | Chocolate Bar 45g   | ...   │ ← MATCH!                  │
//! │  │ CHOC-014 | Choco Crunch Mix    | ...   │ ← MATCH!                  │
//! │  │ GUM-003  | Gummy Bears 150g    | ...   │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results: [CHOC-001, CHOC-014]                                         │
//! │                                                                         │
//! │  A linear scan is fine here: the mock catalog is tens of rows, and     │
//! │  the simulated latency dwarfs the scan anyway.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewProduct, Product, ProductCategory, ProductPatch};

/// Read filters for product lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductQuery {
    /// Every product.
    #[default]
    All,
    /// Products in one category.
    Category(ProductCategory),
    /// Products from one supplier.
    Supplier(String),
    /// Products at or below their minimum stock.
    LowStock,
    /// Substring search over name, SKU, and description.
    Search(String),
}

/// Repository for product data access.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(seed::products(), Latency::standard());
///
/// // Search products
/// let results = repo.search("choco").await?;
///
/// // Get by ID
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Collection<Product>,
    latency: Latency,
}

impl ProductRepository {
    /// Creates a new ProductRepository over the given rows.
    pub fn new(rows: Vec<Product>, latency: Latency) -> Self {
        ProductRepository {
            products: Collection::new(rows),
            latency,
        }
    }

    /// Returns every product.
    pub async fn get_all(&self) -> StoreResult<Vec<Product>> {
        self.latency.read().await;
        Ok(self.products.all().await)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        self.latency.read().await;
        Ok(self.products.find(id).await)
    }

    /// Returns products in the given category.
    pub async fn get_by_category(&self, category: ProductCategory) -> StoreResult<Vec<Product>> {
        self.latency.read().await;
        Ok(self.products.filter(|p| p.category == category).await)
    }

    /// Returns products sourced from the given supplier.
    pub async fn get_by_supplier_id(&self, supplier_id: &str) -> StoreResult<Vec<Product>> {
        self.latency.read().await;
        Ok(self.products.filter(|p| p.supplier_id == supplier_id).await)
    }

    /// Returns products at or below their minimum stock level.
    pub async fn get_low_stock(&self) -> StoreResult<Vec<Product>> {
        self.latency.read().await;
        Ok(self.products.filter(|p| p.is_low_stock()).await)
    }

    /// Searches products by name, SKU, or description.
    ///
    /// Case-insensitive substring match. An empty or whitespace query
    /// returns everything.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching products");

        if needle.is_empty() {
            return Ok(self.products.all().await);
        }

        Ok(self
            .products
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.sku.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new product.
    ///
    /// Assigns a fresh id, stamps `created_at`/`updated_at`, and marks the
    /// product active.
    pub async fn create(&self, draft: NewProduct) -> StoreResult<Product> {
        self.latency.write().await;

        let product = draft.into_product(generate_id(), Utc::now());
        debug!(id = %product.id, sku = %product.sku, "Creating product");

        Ok(self.products.insert(product).await)
    }

    /// Shallow-merges a patch into an existing product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Updated copy
    /// * `Err(StoreError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        self.latency.write().await;
        debug!(id = %id, "Updating product");

        self.products
            .update(id, move |product| {
                patch.apply(product);
                product.updated_at = Utc::now();
            })
            .await
    }

    /// Removes a product.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting product");

        self.products.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for ProductRepository {
    type Entity = Product;
    type Draft = NewProduct;
    type Patch = ProductPatch;
    type Query = ProductQuery;

    async fn load(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        match query {
            ProductQuery::All => self.get_all().await,
            ProductQuery::Category(category) => self.get_by_category(*category).await,
            ProductQuery::Supplier(supplier_id) => self.get_by_supplier_id(supplier_id).await,
            ProductQuery::LowStock => self.get_low_stock().await,
            ProductQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Product>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewProduct) -> StoreResult<Product> {
        ProductRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        ProductRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        ProductRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugar_core::ProductUnit;

    fn sample_draft(name: &str, sku: &str, category: ProductCategory) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            sku: sku.to_string(),
            description: String::new(),
            category,
            unit: ProductUnit::Piece,
            price_cents: 2500,
            cost_cents: 1400,
            stock: 40,
            min_stock: 10,
            supplier_id: "sup-1".to_string(),
            supplier_name: "Dulces del Valle".to_string(),
        }
    }

    fn repo() -> ProductRepository {
        ProductRepository::new(vec![], Latency::none())
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_activates() {
        let repo = repo();

        let product = repo
            .create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();

        assert!(!product.id.is_empty());
        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_three_creates_then_get_all() {
        let repo = repo();

        repo.create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();
        repo.create(sample_draft("Gummy Bears 150g", "GUM-001", ProductCategory::Gummies))
            .await
            .unwrap();
        repo.create(sample_draft("Mint Lollipop", "LOL-001", ProductCategory::Lollipops))
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 3);
        // Insertion order preserved
        assert_eq!(all[0].sku, "CHOC-001");
        assert_eq!(all[2].sku, "LOL-001");
    }

    #[tokio::test]
    async fn test_update_merges_partially() {
        let repo = repo();
        let product = repo
            .create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();

        let patch = ProductPatch {
            price_cents: Some(2900),
            ..ProductPatch::default()
        };
        let updated = repo.update(&product.id, patch).await.unwrap();

        assert_eq!(updated.price_cents, 2900);
        assert_eq!(updated.name, "Chocolate Bar 45g");
        assert_eq!(updated.sku, "CHOC-001");
        assert!(updated.updated_at >= product.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_fails() {
        let repo = repo();
        let err = repo
            .update("ghost", ProductPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Product not found: ghost");
    }

    #[tokio::test]
    async fn test_delete_removes_the_row() {
        let repo = repo();
        let product = repo
            .create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();

        repo.delete(&product.id).await.unwrap();

        assert!(repo.get_by_id(&product.id).await.unwrap().is_none());
        assert!(repo.delete(&product.id).await.is_err());
    }

    #[tokio::test]
    async fn test_category_filter() {
        let repo = repo();
        repo.create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();
        repo.create(sample_draft("Gummy Bears 150g", "GUM-001", ProductCategory::Gummies))
            .await
            .unwrap();

        let chocolates = repo
            .get_by_category(ProductCategory::Chocolates)
            .await
            .unwrap();

        assert_eq!(chocolates.len(), 1);
        assert_eq!(chocolates[0].sku, "CHOC-001");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let repo = repo();
        repo.create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();
        repo.create(sample_draft("Gummy Bears 150g", "GUM-001", ProductCategory::Gummies))
            .await
            .unwrap();

        let hits = repo.search("CHOCO").await.unwrap();
        assert_eq!(hits.len(), 1);

        let sku_hits = repo.search("gum-0").await.unwrap();
        assert_eq!(sku_hits.len(), 1);

        let everything = repo.search("   ").await.unwrap();
        assert_eq!(everything.len(), 2);
    }

    #[tokio::test]
    async fn test_low_stock_boundary_is_inclusive() {
        let repo = repo();
        let mut draft = sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates);
        draft.stock = 10;
        draft.min_stock = 10;
        repo.create(draft).await.unwrap();

        let low = repo.get_low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
    }

    #[tokio::test]
    async fn test_load_dispatches_queries() {
        let repo = repo();
        repo.create(sample_draft("Chocolate Bar 45g", "CHOC-001", ProductCategory::Chocolates))
            .await
            .unwrap();
        repo.create(sample_draft("Gummy Bears 150g", "GUM-001", ProductCategory::Gummies))
            .await
            .unwrap();

        assert_eq!(repo.load(&ProductQuery::All).await.unwrap().len(), 2);
        assert_eq!(
            repo.load(&ProductQuery::Category(ProductCategory::Gummies))
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            repo.load(&ProductQuery::Search("bar".to_string()))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_standard_latency_delays_reads() {
        let repo = ProductRepository::new(vec![], Latency::standard());
        let before = tokio::time::Instant::now();

        repo.get_all().await.unwrap();

        assert_eq!(before.elapsed().as_millis(), 150);
    }

    #[test]
    fn test_query_wire_shape() {
        let json = serde_json::to_string(&ProductQuery::Search("choco".to_string())).unwrap();
        assert_eq!(json, r#"{"search":"choco"}"#);

        let query: ProductQuery = serde_json::from_str("\"low_stock\"").unwrap();
        assert_eq!(query, ProductQuery::LowStock);
    }
}
