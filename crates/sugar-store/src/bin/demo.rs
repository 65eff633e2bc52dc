//! # Store Walkthrough Demo
//!
//! Drives the mock store end to end from the command line.
//!
//! ## Usage
//! ```bash
//! # Full walkthrough with standard latency and sample data
//! cargo run -p sugar-store --bin demo
//!
//! # Instant responses
//! cargo run -p sugar-store --bin demo -- --fast
//!
//! # Start from empty collections
//! cargo run -p sugar-store --bin demo -- --no-sample
//!
//! # Tune latency through the environment (flags still win)
//! SUGAR_READ_DELAY_MS=50 SUGAR_WRITE_DELAY_MS=80 cargo run -p sugar-store --bin demo
//! ```
//!
//! ## What It Exercises
//! - Catalog listing and a validated create + partial update
//! - Customer substring search
//! - Admin login and both redirect destinations
//! - An order status transition with its timestamp stamp
//! - The two-step movement flow (record, then apply)

use std::env;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use sugar_core::access::{post_login_destination, post_logout_destination};
use sugar_core::{
    validation, MovementType, NewInventoryMovement, NewProduct, OrderStatus, Product,
    ProductCategory, ProductPatch, ProductUnit,
};
use sugar_store::{Latency, Store, StoreConfig, StoreResult};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut fast = false;
    let mut sample_data = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fast" | "-f" => {
                fast = true;
            }
            "--no-sample" => {
                sample_data = false;
            }
            "--help" | "-h" => {
                println!("Sugar OS Mock Store Demo");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --fast        Run without simulated latency");
                println!("      --no-sample   Start from empty collections");
                println!("  -h, --help        Show this help message");
                println!();
                println!("Environment:");
                println!("  SUGAR_READ_DELAY_MS, SUGAR_WRITE_DELAY_MS, SUGAR_SAMPLE_DATA");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    // SUGAR_* env overrides form the base; flags tighten on top
    let mut config = StoreConfig::from_env();
    if fast {
        config = config.with_latency(Latency::none());
    }
    if !sample_data {
        config = config.with_sample_data(false);
    }

    println!("🍬 Sugar OS Mock Store Demo");
    println!("===========================");
    println!(
        "Latency: {}ms reads / {}ms writes",
        config.latency.read_delay().as_millis(),
        config.latency.write_delay().as_millis()
    );
    println!(
        "Sample data: {}",
        if config.sample_data { "yes" } else { "no" }
    );
    println!();

    let start = std::time::Instant::now();
    let store = Store::new(config);
    println!("✓ Store opened");

    // Catalog listing
    let products = store.products().get_all().await?;
    println!("✓ Products: {} in catalog", products.len());

    // Validated create, then a partial update
    let draft = NewProduct {
        name: "Obleas con Cajeta".to_string(),
        sku: "OBL-CAJ".to_string(),
        description: "Wafer discs with goat-milk caramel".to_string(),
        category: ProductCategory::Seasonal,
        unit: ProductUnit::Piece,
        price_cents: 1500,
        cost_cents: 700,
        stock: 50,
        min_stock: 10,
        supplier_id: "sup-vega".to_string(),
        supplier_name: "Dulces Vega S.A. de C.V.".to_string(),
    };
    let created = create_validated_product(&store, draft).await?;
    println!("✓ Created \"{}\" ({})", created.name, created.sku);

    let patch = ProductPatch {
        name: Some("Obleas con Cajeta 10pz".to_string()),
        ..ProductPatch::default()
    };
    let renamed = store.products().update(&created.id, patch).await?;
    println!(
        "✓ Renamed to \"{}\" (partial update, SKU still {})",
        renamed.name, renamed.sku
    );

    // Customer search
    let hits = store.customers().search("esquina").await?;
    println!("✓ Customer search \"esquina\": {} hits", hits.len());
    for customer in &hits {
        println!("  - {}", customer.name);
    }

    // Login and redirect destinations
    match store.auth().login("admin@sugaros.mx", "caramelo").await {
        Ok(user) => {
            let destination = post_login_destination(&user.role_name);
            println!("✓ Logged in {} → {}", user.email, destination.path());
            println!("  Logout lands on {}", post_logout_destination().path());
        }
        Err(e) => println!("⚠ Login skipped: {}", e),
    }

    // Order status transition
    let pending = store.orders().get_by_status(OrderStatus::Pending).await?;
    match pending.first() {
        Some(order) => {
            let confirmed = store
                .orders()
                .update_status(&order.id, OrderStatus::Confirmed)
                .await?;
            println!(
                "✓ Order {} Pending → Confirmed (confirmed_at {})",
                confirmed.order_number,
                confirmed
                    .confirmed_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default()
            );
        }
        None => println!("⚠ No pending orders to transition"),
    }

    // Two-step movement: record it, then apply the delta
    let inventory = store.inventory().get_all().await?;
    match inventory.first() {
        Some(item) => {
            store
                .movements()
                .create(NewInventoryMovement {
                    inventory_item_id: item.id.clone(),
                    product_name: item.product_name.clone(),
                    warehouse_id: item.warehouse_id.clone(),
                    warehouse_name: item.warehouse_name.clone(),
                    movement_type: MovementType::Out,
                    quantity: -12,
                    reason: Some("demo dispatch".to_string()),
                    reference: None,
                })
                .await?;
            let adjusted = store.inventory().adjust_quantity(&item.id, -12).await?;
            println!(
                "✓ Movement recorded and applied: {} {} → {} ({:?})",
                adjusted.product_name, item.quantity, adjusted.quantity, adjusted.status
            );
        }
        None => println!("⚠ No inventory to move"),
    }

    println!();
    println!("✓ Demo complete in {:?}", start.elapsed());

    Ok(())
}

/// Validates a draft the way a form would, then stores it.
///
/// Any failed check converts into `StoreError::Validation` and aborts
/// the create; repositories themselves never validate.
async fn create_validated_product(store: &Store, draft: NewProduct) -> StoreResult<Product> {
    validation::validate_name(&draft.name)?;
    validation::validate_sku(&draft.sku)?;
    validation::validate_price(draft.price_cents)?;
    validation::validate_quantity(draft.stock)?;

    store.products().create(draft).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sugar=trace` - Show trace for sugar crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sugar=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
