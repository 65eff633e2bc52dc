//! # Customer Repository
//!
//! Mock data access for customers.
//!
//! ## Key Operations
//! - CRUD over the in-memory customer list
//! - Type filter (retail / wholesale / route)
//! - Substring search across name, phone, and address
//!
//! Route customers are the little corner stores a truck visits; their
//! names and addresses are what the search box is used for in practice.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{Customer, CustomerPatch, CustomerType, NewCustomer};

/// Read filters for customer lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerQuery {
    /// Every customer.
    #[default]
    All,
    /// Customers of one type.
    Type(CustomerType),
    /// Substring search over name, phone, and address.
    Search(String),
}

/// Repository for customer data access.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    customers: Collection<Customer>,
    latency: Latency,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository over the given rows.
    pub fn new(rows: Vec<Customer>, latency: Latency) -> Self {
        CustomerRepository {
            customers: Collection::new(rows),
            latency,
        }
    }

    /// Returns every customer.
    pub async fn get_all(&self) -> StoreResult<Vec<Customer>> {
        self.latency.read().await;
        Ok(self.customers.all().await)
    }

    /// Gets a customer by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Customer>> {
        self.latency.read().await;
        Ok(self.customers.find(id).await)
    }

    /// Returns customers of the given type.
    pub async fn get_by_type(&self, customer_type: CustomerType) -> StoreResult<Vec<Customer>> {
        self.latency.read().await;
        Ok(self
            .customers
            .filter(|c| c.customer_type == customer_type)
            .await)
    }

    /// Searches customers by name, phone, or address.
    ///
    /// Case-insensitive substring match. An empty query returns everything.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Customer>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching customers");

        if needle.is_empty() {
            return Ok(self.customers.all().await);
        }

        Ok(self
            .customers
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.to_lowercase().contains(&needle)
                    || c.address.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new customer.
    pub async fn create(&self, draft: NewCustomer) -> StoreResult<Customer> {
        self.latency.write().await;

        let customer = draft.into_customer(generate_id(), Utc::now());
        debug!(id = %customer.id, name = %customer.name, "Creating customer");

        Ok(self.customers.insert(customer).await)
    }

    /// Shallow-merges a patch into an existing customer.
    pub async fn update(&self, id: &str, patch: CustomerPatch) -> StoreResult<Customer> {
        self.latency.write().await;
        debug!(id = %id, "Updating customer");

        self.customers
            .update(id, move |customer| {
                patch.apply(customer);
                customer.updated_at = Utc::now();
            })
            .await
    }

    /// Removes a customer.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting customer");

        self.customers.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for CustomerRepository {
    type Entity = Customer;
    type Draft = NewCustomer;
    type Patch = CustomerPatch;
    type Query = CustomerQuery;

    async fn load(&self, query: &CustomerQuery) -> StoreResult<Vec<Customer>> {
        match query {
            CustomerQuery::All => self.get_all().await,
            CustomerQuery::Type(customer_type) => self.get_by_type(*customer_type).await,
            CustomerQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Customer>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewCustomer) -> StoreResult<Customer> {
        CustomerRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: CustomerPatch) -> StoreResult<Customer> {
        CustomerRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        CustomerRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(name: &str, address: &str, customer_type: CustomerType) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: "cliente@example.mx".to_string(),
            phone: "555-0300".to_string(),
            address: address.to_string(),
            customer_type,
        }
    }

    fn seeded() -> Vec<NewCustomer> {
        vec![
            sample_draft(
                "Abarrotes La Esquina",
                "Av. Juárez 45, Puebla",
                CustomerType::Route,
            ),
            sample_draft(
                "María López",
                "Calle 5 de Mayo 10",
                CustomerType::Retail,
            ),
            sample_draft(
                "Dulcería El Portal",
                "Esquina Morelos y Negrete",
                CustomerType::Wholesale,
            ),
        ]
    }

    async fn seeded_repo() -> CustomerRepository {
        let repo = CustomerRepository::new(vec![], Latency::none());
        for draft in seeded() {
            repo.create(draft).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_search_esquina_matches_name_and_address() {
        let repo = seeded_repo().await;

        let hits = repo.search("esquina").await.unwrap();

        // One match in the name, one in the address
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|c| c.name == "Abarrotes La Esquina"));
        assert!(hits.iter().any(|c| c.name == "Dulcería El Portal"));
    }

    #[tokio::test]
    async fn test_search_matches_phone() {
        let repo = seeded_repo().await;
        let hits = repo.search("555-03").await.unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[tokio::test]
    async fn test_type_filter() {
        let repo = seeded_repo().await;
        let route = repo.get_by_type(CustomerType::Route).await.unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route[0].name, "Abarrotes La Esquina");
    }

    #[tokio::test]
    async fn test_update_preserves_type_when_absent() {
        let repo = seeded_repo().await;
        let customer = &repo.get_by_type(CustomerType::Retail).await.unwrap()[0];

        let patch = CustomerPatch {
            phone: Some("555-0999".to_string()),
            ..CustomerPatch::default()
        };
        let updated = repo.update(&customer.id, patch).await.unwrap();

        assert_eq!(updated.phone, "555-0999");
        assert_eq!(updated.customer_type, CustomerType::Retail);
    }
}
