//! # Order Types
//!
//! Entity records for order management: in-store orders, online orders,
//! route/delivery orders, and the customers behind them.
//!
//! ## Status State Machines
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order        pending ──► confirmed ──► completed                      │
//! │                   │            │                                        │
//! │                   └────────────┴─────► cancelled                        │
//! │                                                                         │
//! │  OnlineOrder  pending ──► processing ──► shipped ──► delivered         │
//! │                   │            │            │                           │
//! │                   └────────────┴────────────┴──────► cancelled          │
//! │                                                                         │
//! │  RouteOrder   assigned ──► in_transit ──► delivered                     │
//! │                                 │                                       │
//! │                                 └───────► failed                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each non-initial status has a paired `Option<DateTime>` stamp, written
//! by `set_status` when that status is entered. Transitions are NOT
//! validated: the mock layer accepts any status at any time.
//!
//! ## Totals
//! `total = subtotal + tax − discount (+ shipping)` is expected but never
//! recomputed when items change; keeping totals consistent is the
//! caller's responsibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Entity;

// =============================================================================
// Order Item
// =============================================================================

/// A line item embedded in an order.
/// Uses snapshot pattern to freeze product data at order time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    /// Product name at order time (frozen).
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i32,
    /// Unit price in cents at order time (frozen).
    pub unit_price_cents: i64,
    /// Line total (unit_price × quantity); caller-supplied, not recomputed.
    pub line_total_cents: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Status of an in-store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Captured, awaiting confirmation.
    Pending,
    /// Confirmed by the branch.
    Confirmed,
    /// Fulfilled and closed.
    Completed,
    /// Cancelled at any point.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// An in-store order served from a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable order number ("ORD-1001").
    pub order_number: String,

    /// Warehouse relation (denormalized).
    pub warehouse_id: String,

    /// Cached warehouse display name.
    pub warehouse_name: String,

    /// Customer relation (denormalized).
    pub customer_id: String,

    /// Cached customer display name.
    pub customer_name: String,

    /// Line items, frozen at order time.
    pub items: Vec<OrderItem>,

    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    /// Expected to equal subtotal + tax − discount; never recomputed here.
    pub total_cents: i64,

    pub status: OrderStatus,
    pub notes: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub completed_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total units across all line items.
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sets the status and stamps the matching transition timestamp.
    /// Transitions are not validated; entering `Pending` stamps nothing.
    pub fn set_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            OrderStatus::Pending => {}
            OrderStatus::Confirmed => self.confirmed_at = Some(now),
            OrderStatus::Completed => self.completed_at = Some(now),
            OrderStatus::Cancelled => self.cancelled_at = Some(now),
        }
    }
}

impl Entity for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating an in-store order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewOrder {
    pub order_number: String,
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub notes: Option<String>,
}

impl NewOrder {
    /// Materializes the stored record; new orders start `Pending`.
    pub fn into_order(self, id: String, now: DateTime<Utc>) -> Order {
        Order {
            id,
            order_number: self.order_number,
            warehouse_id: self.warehouse_id,
            warehouse_name: self.warehouse_name,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            items: self.items,
            subtotal_cents: self.subtotal_cents,
            tax_cents: self.tax_cents,
            discount_cents: self.discount_cents,
            total_cents: self.total_cents,
            status: OrderStatus::default(),
            notes: self.notes,
            created_at: now,
            confirmed_at: None,
            completed_at: None,
            cancelled_at: None,
        }
    }
}

/// Partial update for an in-store order.
///
/// Setting `status` here does NOT stamp a transition timestamp; the
/// repository's `update_status` is the stamping path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderPatch {
    pub order_number: Option<String>,
    pub warehouse_id: Option<String>,
    pub warehouse_name: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub subtotal_cents: Option<i64>,
    pub tax_cents: Option<i64>,
    pub discount_cents: Option<i64>,
    pub total_cents: Option<i64>,
    pub status: Option<OrderStatus>,
    pub notes: Option<String>,
}

impl OrderPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, order: &mut Order) {
        if let Some(order_number) = &self.order_number {
            order.order_number = order_number.clone();
        }
        if let Some(warehouse_id) = &self.warehouse_id {
            order.warehouse_id = warehouse_id.clone();
        }
        if let Some(warehouse_name) = &self.warehouse_name {
            order.warehouse_name = warehouse_name.clone();
        }
        if let Some(customer_id) = &self.customer_id {
            order.customer_id = customer_id.clone();
        }
        if let Some(customer_name) = &self.customer_name {
            order.customer_name = customer_name.clone();
        }
        if let Some(items) = &self.items {
            order.items = items.clone();
        }
        if let Some(subtotal_cents) = self.subtotal_cents {
            order.subtotal_cents = subtotal_cents;
        }
        if let Some(tax_cents) = self.tax_cents {
            order.tax_cents = tax_cents;
        }
        if let Some(discount_cents) = self.discount_cents {
            order.discount_cents = discount_cents;
        }
        if let Some(total_cents) = self.total_cents {
            order.total_cents = total_cents;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(notes) = &self.notes {
            order.notes = Some(notes.clone());
        }
    }
}

// =============================================================================
// Online Order Status
// =============================================================================

/// Status of an online (web shop) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OnlineOrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Default for OnlineOrderStatus {
    fn default() -> Self {
        OnlineOrderStatus::Pending
    }
}

// =============================================================================
// Online Order
// =============================================================================

/// An order placed through the public web shop.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OnlineOrder {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Human-readable order number ("WEB-2001").
    pub order_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    /// Expected to equal subtotal + tax − discount + shipping.
    pub total_cents: i64,
    pub status: OnlineOrderStatus,
    /// Carrier tracking number, set once shipped.
    pub tracking_number: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub processed_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub shipped_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl OnlineOrder {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the shipping charge as Money.
    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    /// Total units across all line items.
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sets the status and stamps the matching transition timestamp.
    pub fn set_status(&mut self, status: OnlineOrderStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            OnlineOrderStatus::Pending => {}
            OnlineOrderStatus::Processing => self.processed_at = Some(now),
            OnlineOrderStatus::Shipped => self.shipped_at = Some(now),
            OnlineOrderStatus::Delivered => self.delivered_at = Some(now),
            OnlineOrderStatus::Cancelled => self.cancelled_at = Some(now),
        }
    }
}

impl Entity for OnlineOrder {
    const KIND: &'static str = "OnlineOrder";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating an online order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewOnlineOrder {
    pub order_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

impl NewOnlineOrder {
    pub fn into_online_order(self, id: String, now: DateTime<Utc>) -> OnlineOrder {
        OnlineOrder {
            id,
            order_number: self.order_number,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            shipping_address: self.shipping_address,
            items: self.items,
            subtotal_cents: self.subtotal_cents,
            tax_cents: self.tax_cents,
            discount_cents: self.discount_cents,
            shipping_cents: self.shipping_cents,
            total_cents: self.total_cents,
            status: OnlineOrderStatus::default(),
            tracking_number: None,
            created_at: now,
            processed_at: None,
            shipped_at: None,
            delivered_at: None,
            cancelled_at: None,
        }
    }
}

/// Partial update for an online order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OnlineOrderPatch {
    pub order_number: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub shipping_address: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub subtotal_cents: Option<i64>,
    pub tax_cents: Option<i64>,
    pub discount_cents: Option<i64>,
    pub shipping_cents: Option<i64>,
    pub total_cents: Option<i64>,
    pub status: Option<OnlineOrderStatus>,
    pub tracking_number: Option<String>,
}

impl OnlineOrderPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, order: &mut OnlineOrder) {
        if let Some(order_number) = &self.order_number {
            order.order_number = order_number.clone();
        }
        if let Some(customer_id) = &self.customer_id {
            order.customer_id = customer_id.clone();
        }
        if let Some(customer_name) = &self.customer_name {
            order.customer_name = customer_name.clone();
        }
        if let Some(email) = &self.email {
            order.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            order.phone = phone.clone();
        }
        if let Some(shipping_address) = &self.shipping_address {
            order.shipping_address = shipping_address.clone();
        }
        if let Some(items) = &self.items {
            order.items = items.clone();
        }
        if let Some(subtotal_cents) = self.subtotal_cents {
            order.subtotal_cents = subtotal_cents;
        }
        if let Some(tax_cents) = self.tax_cents {
            order.tax_cents = tax_cents;
        }
        if let Some(discount_cents) = self.discount_cents {
            order.discount_cents = discount_cents;
        }
        if let Some(shipping_cents) = self.shipping_cents {
            order.shipping_cents = shipping_cents;
        }
        if let Some(total_cents) = self.total_cents {
            order.total_cents = total_cents;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(tracking_number) = &self.tracking_number {
            order.tracking_number = Some(tracking_number.clone());
        }
    }
}

// =============================================================================
// Route Order Status
// =============================================================================

/// Status of a route/delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RouteOrderStatus {
    /// Assigned to a driver and route.
    Assigned,
    /// On the truck, out for delivery.
    InTransit,
    /// Dropped off and signed.
    Delivered,
    /// Delivery attempt failed.
    Failed,
}

impl Default for RouteOrderStatus {
    fn default() -> Self {
        RouteOrderStatus::Assigned
    }
}

// =============================================================================
// Route Order
// =============================================================================

/// A delivery order assigned to a distribution route.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteOrder {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Human-readable order number ("RUT-3001").
    pub order_number: String,
    /// Route name ("Ruta Norte").
    pub route_name: String,
    pub driver_name: String,
    pub customer_id: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub status: RouteOrderStatus,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub in_transit_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub failed_at: Option<DateTime<Utc>>,
}

impl RouteOrder {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total units across all line items.
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sets the status and stamps the matching transition timestamp.
    pub fn set_status(&mut self, status: RouteOrderStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            RouteOrderStatus::Assigned => {}
            RouteOrderStatus::InTransit => self.in_transit_at = Some(now),
            RouteOrderStatus::Delivered => self.delivered_at = Some(now),
            RouteOrderStatus::Failed => self.failed_at = Some(now),
        }
    }
}

impl Entity for RouteOrder {
    const KIND: &'static str = "RouteOrder";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a route order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewRouteOrder {
    pub order_number: String,
    pub route_name: String,
    pub driver_name: String,
    pub customer_id: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub items: Vec<OrderItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub notes: Option<String>,
}

impl NewRouteOrder {
    pub fn into_route_order(self, id: String, now: DateTime<Utc>) -> RouteOrder {
        RouteOrder {
            id,
            order_number: self.order_number,
            route_name: self.route_name,
            driver_name: self.driver_name,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            delivery_address: self.delivery_address,
            items: self.items,
            subtotal_cents: self.subtotal_cents,
            tax_cents: self.tax_cents,
            discount_cents: self.discount_cents,
            total_cents: self.total_cents,
            status: RouteOrderStatus::default(),
            notes: self.notes,
            created_at: now,
            in_transit_at: None,
            delivered_at: None,
            failed_at: None,
        }
    }
}

/// Partial update for a route order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteOrderPatch {
    pub order_number: Option<String>,
    pub route_name: Option<String>,
    pub driver_name: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub delivery_address: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub subtotal_cents: Option<i64>,
    pub tax_cents: Option<i64>,
    pub discount_cents: Option<i64>,
    pub total_cents: Option<i64>,
    pub status: Option<RouteOrderStatus>,
    pub notes: Option<String>,
}

impl RouteOrderPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, order: &mut RouteOrder) {
        if let Some(order_number) = &self.order_number {
            order.order_number = order_number.clone();
        }
        if let Some(route_name) = &self.route_name {
            order.route_name = route_name.clone();
        }
        if let Some(driver_name) = &self.driver_name {
            order.driver_name = driver_name.clone();
        }
        if let Some(customer_id) = &self.customer_id {
            order.customer_id = customer_id.clone();
        }
        if let Some(customer_name) = &self.customer_name {
            order.customer_name = customer_name.clone();
        }
        if let Some(delivery_address) = &self.delivery_address {
            order.delivery_address = delivery_address.clone();
        }
        if let Some(items) = &self.items {
            order.items = items.clone();
        }
        if let Some(subtotal_cents) = self.subtotal_cents {
            order.subtotal_cents = subtotal_cents;
        }
        if let Some(tax_cents) = self.tax_cents {
            order.tax_cents = tax_cents;
        }
        if let Some(discount_cents) = self.discount_cents {
            order.discount_cents = discount_cents;
        }
        if let Some(total_cents) = self.total_cents {
            order.total_cents = total_cents;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(notes) = &self.notes {
            order.notes = Some(notes.clone());
        }
    }
}

// =============================================================================
// Customer Type
// =============================================================================

/// How a customer buys from the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    /// Walk-in retail customer.
    Retail,
    /// Bulk buyer with negotiated pricing.
    Wholesale,
    /// Corner store served by a delivery route.
    Route,
}

impl Default for CustomerType {
    fn default() -> Self {
        CustomerType::Retail
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer of the chain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub customer_type: CustomerType,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Customer {
    const KIND: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub customer_type: CustomerType,
}

impl NewCustomer {
    pub fn into_customer(self, id: String, now: DateTime<Utc>) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            customer_type: self.customer_type,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub customer_type: Option<CustomerType>,
    pub is_active: Option<bool>,
}

impl CustomerPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = phone.clone();
        }
        if let Some(address) = &self.address {
            customer.address = address.clone();
        }
        if let Some(customer_type) = self.customer_type {
            customer.customer_type = customer_type;
        }
        if let Some(is_active) = self.is_active {
            customer.is_active = is_active;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<OrderItem> {
        vec![
            OrderItem {
                product_id: "prod-1".to_string(),
                product_name: "Gummy Bears 500g".to_string(),
                quantity: 3,
                unit_price_cents: 299,
                line_total_cents: 897,
            },
            OrderItem {
                product_id: "prod-2".to_string(),
                product_name: "Chocolate Bar 90g".to_string(),
                quantity: 2,
                unit_price_cents: 450,
                line_total_cents: 900,
            },
        ]
    }

    fn sample_order() -> Order {
        NewOrder {
            order_number: "ORD-1001".to_string(),
            warehouse_id: "wh-1".to_string(),
            warehouse_name: "Central".to_string(),
            customer_id: "cus-1".to_string(),
            customer_name: "Abarrotes La Esquina".to_string(),
            items: sample_items(),
            subtotal_cents: 1797,
            tax_cents: 288,
            discount_cents: 0,
            total_cents: 2085,
            notes: None,
        }
        .into_order("ord-1".to_string(), Utc::now())
    }

    #[test]
    fn test_new_order_starts_pending_without_stamps() {
        let order = sample_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.confirmed_at.is_none());
        assert!(order.completed_at.is_none());
        assert!(order.cancelled_at.is_none());
        assert_eq!(order.item_count(), 5);
    }

    #[test]
    fn test_set_status_stamps_matching_timestamp() {
        let mut order = sample_order();
        let now = Utc::now();

        order.set_status(OrderStatus::Confirmed, now);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.confirmed_at, Some(now));
        assert!(order.completed_at.is_none());

        order.set_status(OrderStatus::Completed, now);
        assert_eq!(order.completed_at, Some(now));
        // Earlier stamp survives
        assert_eq!(order.confirmed_at, Some(now));
    }

    #[test]
    fn test_order_patch_does_not_stamp() {
        let mut order = sample_order();
        let patch = OrderPatch {
            status: Some(OrderStatus::Cancelled),
            ..OrderPatch::default()
        };
        patch.apply(&mut order);

        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.cancelled_at.is_none());
    }

    #[test]
    fn test_order_patch_preserves_items_and_totals() {
        let mut order = sample_order();
        let patch = OrderPatch {
            notes: Some("deliver before noon".to_string()),
            ..OrderPatch::default()
        };
        patch.apply(&mut order);

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_cents, 2085);
        assert_eq!(order.notes.as_deref(), Some("deliver before noon"));
    }

    #[test]
    fn test_online_order_status_chain() {
        let mut order = NewOnlineOrder {
            order_number: "WEB-2001".to_string(),
            customer_id: "cus-2".to_string(),
            customer_name: "María López".to_string(),
            email: "maria@example.com".to_string(),
            phone: "555-0123".to_string(),
            shipping_address: "Calle Hidalgo 45".to_string(),
            items: sample_items(),
            subtotal_cents: 1797,
            tax_cents: 288,
            discount_cents: 100,
            shipping_cents: 899,
            total_cents: 2884,
        }
        .into_online_order("web-1".to_string(), Utc::now());

        let now = Utc::now();
        order.set_status(OnlineOrderStatus::Processing, now);
        order.set_status(OnlineOrderStatus::Shipped, now);
        order.set_status(OnlineOrderStatus::Delivered, now);

        assert_eq!(order.processed_at, Some(now));
        assert_eq!(order.shipped_at, Some(now));
        assert_eq!(order.delivered_at, Some(now));
        assert!(order.cancelled_at.is_none());
        assert_eq!(order.shipping(), Money::from_cents(899));
    }

    #[test]
    fn test_route_order_failed_stamp() {
        let mut order = NewRouteOrder {
            order_number: "RUT-3001".to_string(),
            route_name: "Ruta Norte".to_string(),
            driver_name: "Pedro S.".to_string(),
            customer_id: "cus-3".to_string(),
            customer_name: "Miscelánea El Sol".to_string(),
            delivery_address: "Av. Morelos 210".to_string(),
            items: sample_items(),
            subtotal_cents: 1797,
            tax_cents: 288,
            discount_cents: 0,
            total_cents: 2085,
            notes: None,
        }
        .into_route_order("rut-1".to_string(), Utc::now());

        assert_eq!(order.status, RouteOrderStatus::Assigned);
        let now = Utc::now();
        order.set_status(RouteOrderStatus::Failed, now);
        assert_eq!(order.failed_at, Some(now));
        assert!(order.delivered_at.is_none());
    }

    #[test]
    fn test_customer_patch_partial_merge() {
        let mut customer = NewCustomer {
            name: "Abarrotes La Esquina".to_string(),
            email: "esquina@example.com".to_string(),
            phone: "555-0456".to_string(),
            address: "Esquina Juárez y Madero".to_string(),
            customer_type: CustomerType::Route,
        }
        .into_customer("cus-1".to_string(), Utc::now());

        let patch = CustomerPatch {
            phone: Some("555-0999".to_string()),
            ..CustomerPatch::default()
        };
        patch.apply(&mut customer);

        assert_eq!(customer.phone, "555-0999");
        assert_eq!(customer.name, "Abarrotes La Esquina");
        assert_eq!(customer.customer_type, CustomerType::Route);
    }
}
