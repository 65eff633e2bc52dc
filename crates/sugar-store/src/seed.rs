//! # Seed Dataset
//!
//! The fixed sample dataset the store opens with when
//! `StoreConfig.sample_data` is set.
//!
//! ## Dataset Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sugar OS Sample Dataset                            │
//! │                                                                         │
//! │  Identity    5 roles, 15 permissions, 5 users (1 admin, 1 inactive)    │
//! │  Catalog     9 products, 3 suppliers                                   │
//! │  Network     2 branches, 3 warehouses (Central / Branch / RouteTruck)  │
//! │  Customers   5 (retail, wholesale, route)                              │
//! │  Orders      2 in-store, 1 online, 1 route                             │
//! │  Inventory   6 stock items, 4 movements, 4 alerts                      │
//! │                                                                         │
//! │  The rows cross-reference by fixed readable ids ("wh-central",         │
//! │  "cust-esquina"). Counters that mirror other rows (role user           │
//! │  counts, branch warehouse counts, warehouse stock totals) are kept     │
//! │  consistent by hand and locked in by the tests below.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is materialized through the same `New*` drafts the
//! repositories use, then nudged into non-default states (an inactive
//! account, stamped order transitions, a resolved alert) the way real
//! history would have left them.

use chrono::{DateTime, Utc};

use sugar_core::{
    AlertStatus, AlertType, Branch, Customer, CustomerType, InventoryAlert, InventoryItem,
    InventoryMovement, MovementType, NewBranch, NewCustomer, NewInventoryAlert, NewInventoryItem,
    NewInventoryMovement, NewOnlineOrder, NewOrder, NewPermission, NewProduct, NewRole,
    NewRouteOrder, NewSupplier, NewUser, NewWarehouse, OnlineOrder, OnlineOrderStatus, Order,
    OrderItem, OrderStatus, Permission, PermissionAction, Product, ProductCategory, ProductUnit,
    Role, RouteOrder, RouteOrderStatus, Supplier, User, Warehouse, WarehouseType,
};

/// Initial rows for every collection in the store.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub branches: Vec<Branch>,
    pub warehouses: Vec<Warehouse>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub online_orders: Vec<OnlineOrder>,
    pub route_orders: Vec<RouteOrder>,
    pub inventory: Vec<InventoryItem>,
    pub movements: Vec<InventoryMovement>,
    pub alerts: Vec<InventoryAlert>,
}

/// Builds the full sample dataset.
pub fn sample_data() -> SeedData {
    let now = Utc::now();

    SeedData {
        roles: seed_roles(now),
        permissions: seed_permissions(now),
        users: seed_users(now),
        products: seed_products(now),
        suppliers: seed_suppliers(now),
        branches: seed_branches(now),
        warehouses: seed_warehouses(now),
        customers: seed_customers(now),
        orders: seed_orders(now),
        online_orders: seed_online_orders(now),
        route_orders: seed_route_orders(now),
        inventory: seed_inventory(now),
        movements: seed_movements(now),
        alerts: seed_alerts(now),
    }
}

// =============================================================================
// Identity
// =============================================================================

fn seed_permissions(now: DateTime<Utc>) -> Vec<Permission> {
    let rows: Vec<(&str, &str, &str, &str, Option<&str>, PermissionAction)> = vec![
        ("perm-dashboard-view", "View Dashboard", "See the landing metrics", "Dashboard", None, PermissionAction::View),
        ("perm-inventory-view", "View Inventory", "Browse stock levels", "Inventory", None, PermissionAction::View),
        ("perm-inventory-adjust", "Adjust Stock", "Apply quantity deltas", "Inventory", None, PermissionAction::Edit),
        ("perm-movements-view", "View Movements", "Browse the movement log", "Inventory", Some("Movements"), PermissionAction::View),
        ("perm-movements-create", "Record Movements", "Append to the movement log", "Inventory", Some("Movements"), PermissionAction::Create),
        ("perm-alerts-manage", "Manage Alerts", "Acknowledge and resolve stock alerts", "Inventory", Some("Alerts"), PermissionAction::Manage),
        ("perm-orders-view", "View Orders", "Browse in-store orders", "Orders", None, PermissionAction::View),
        ("perm-orders-manage", "Manage Orders", "Create and transition in-store orders", "Orders", None, PermissionAction::Manage),
        ("perm-online-orders-manage", "Manage Online Orders", "Work the web-shop queue", "Orders", Some("Online"), PermissionAction::Manage),
        ("perm-route-orders-manage", "Manage Route Orders", "Assign and close route deliveries", "Orders", Some("Routes"), PermissionAction::Manage),
        ("perm-products-manage", "Manage Products", "Edit the product catalog", "Catalog", None, PermissionAction::Manage),
        ("perm-suppliers-manage", "Manage Suppliers", "Edit the supplier list", "Catalog", None, PermissionAction::Manage),
        ("perm-users-manage", "Manage Users", "Create and deactivate console accounts", "Administration", None, PermissionAction::Manage),
        ("perm-roles-manage", "Manage Roles", "Edit roles and their permissions", "Administration", None, PermissionAction::Manage),
        ("perm-reports-export", "Export Reports", "Download sales and stock reports", "Reports", None, PermissionAction::Export),
    ];

    rows.into_iter()
        .map(|(id, name, description, module, sub_module, action)| {
            NewPermission {
                name: name.to_string(),
                description: description.to_string(),
                module: module.to_string(),
                sub_module: sub_module.map(str::to_string),
                action,
            }
            .into_permission(id.to_string(), now)
        })
        .collect()
}

fn seed_roles(now: DateTime<Utc>) -> Vec<Role> {
    let all_permissions = [
        "perm-dashboard-view",
        "perm-inventory-view",
        "perm-inventory-adjust",
        "perm-movements-view",
        "perm-movements-create",
        "perm-alerts-manage",
        "perm-orders-view",
        "perm-orders-manage",
        "perm-online-orders-manage",
        "perm-route-orders-manage",
        "perm-products-manage",
        "perm-suppliers-manage",
        "perm-users-manage",
        "perm-roles-manage",
        "perm-reports-export",
    ];

    let rows: Vec<(&str, &str, &str, Vec<&str>)> = vec![
        (
            "role-admin",
            "Administrator",
            "Full access to every console module",
            all_permissions.to_vec(),
        ),
        (
            "role-manager",
            "Manager",
            "Runs a branch: inventory, orders, catalog, reports",
            vec![
                "perm-dashboard-view",
                "perm-inventory-view",
                "perm-inventory-adjust",
                "perm-movements-view",
                "perm-movements-create",
                "perm-alerts-manage",
                "perm-orders-view",
                "perm-orders-manage",
                "perm-online-orders-manage",
                "perm-route-orders-manage",
                "perm-products-manage",
                "perm-suppliers-manage",
                "perm-reports-export",
            ],
        ),
        (
            "role-cashier",
            "Cashier",
            "Counter sales and order lookup",
            vec!["perm-dashboard-view", "perm-orders-view"],
        ),
        (
            "role-clerk",
            "Warehouse Clerk",
            "Stock counts, movements, and alerts",
            vec![
                "perm-inventory-view",
                "perm-inventory-adjust",
                "perm-movements-view",
                "perm-movements-create",
                "perm-alerts-manage",
            ],
        ),
        (
            "role-driver",
            "Route Driver",
            "Deliveries along an assigned route",
            vec!["perm-orders-view", "perm-route-orders-manage"],
        ),
    ];

    rows.into_iter()
        .map(|(id, name, description, permissions)| {
            let mut role = NewRole {
                name: name.to_string(),
                description: description.to_string(),
                permissions: permissions.into_iter().map(str::to_string).collect(),
            }
            .into_role(id.to_string(), now);
            // One seeded user per role; see seed_users
            role.users_count = 1;
            role
        })
        .collect()
}

fn seed_users(now: DateTime<Utc>) -> Vec<User> {
    let rows: Vec<(&str, &str, &str, &str, &str, &str)> = vec![
        ("user-ana", "Ana Torres", "admin@sugaros.mx", "caramelo", "role-admin", "Administrator"),
        ("user-carlos", "Carlos Mendoza", "carlos@sugaros.mx", "chocolate1", "role-manager", "Manager"),
        ("user-benito", "Benito Ruiz", "benito@sugaros.mx", "paleta22", "role-cashier", "Cashier"),
        ("user-lupita", "Lupita Hernández", "lupita@sugaros.mx", "gomita99", "role-clerk", "Warehouse Clerk"),
        ("user-jorge", "Jorge Ramírez", "jorge@sugaros.mx", "tamarindo7", "role-driver", "Route Driver"),
    ];

    let mut users: Vec<User> = rows
        .into_iter()
        .map(|(id, name, email, password, role_id, role_name)| {
            NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role_id: role_id.to_string(),
                role_name: role_name.to_string(),
            }
            .into_user(id.to_string(), now)
        })
        .collect();

    // Benito left the company; his account stays for order history
    users[2].is_active = false;

    users
}

// =============================================================================
// Catalog
// =============================================================================

fn seed_suppliers(now: DateTime<Utc>) -> Vec<Supplier> {
    let rows: Vec<(&str, &str, &str, &str, &str, &str, &str)> = vec![
        (
            "sup-vega",
            "Dulces Vega S.A. de C.V.",
            "DVE850214QA7",
            "Laura Vega",
            "ventas@dulcesvega.mx",
            "6188110234",
            "Parque Industrial Lagunero 18, Gómez Palacio",
        ),
        (
            "sup-delnorte",
            "Distribuidora Del Norte",
            "DDN910815KX2",
            "Ramón Castillo",
            "pedidos@delnorte.mx",
            "8714429871",
            "Blvd. Miguel Alemán 2201, Torreón",
        ),
        (
            "sup-golosinas",
            "Golosinas Mexicanas",
            "GME030622PL9",
            "Sofía Medina",
            "contacto@golosinasmx.com",
            "3338761540",
            "Calz. Lázaro Cárdenas 3115, Guadalajara",
        ),
    ];

    rows.into_iter()
        .map(|(id, name, rfc, contact_name, email, phone, address)| {
            NewSupplier {
                name: name.to_string(),
                rfc: rfc.to_string(),
                contact_name: contact_name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
            }
            .into_supplier(id.to_string(), now)
        })
        .collect()
}

fn seed_products(now: DateTime<Utc>) -> Vec<Product> {
    struct Row {
        id: &'static str,
        name: &'static str,
        sku: &'static str,
        description: &'static str,
        category: ProductCategory,
        unit: ProductUnit,
        price_cents: i64,
        cost_cents: i64,
        stock: i32,
        min_stock: i32,
        supplier_id: &'static str,
        supplier_name: &'static str,
    }

    let rows = vec![
        Row {
            id: "prod-choco-bar",
            name: "Barra de Chocolate con Leche 45g",
            sku: "CHO-045",
            description: "Milk chocolate bar, single serving",
            category: ProductCategory::Chocolates,
            unit: ProductUnit::Piece,
            price_cents: 2500,
            cost_cents: 1400,
            stock: 120,
            min_stock: 30,
            supplier_id: "sup-vega",
            supplier_name: "Dulces Vega S.A. de C.V.",
        },
        Row {
            id: "prod-choco-caja",
            name: "Caja de Chocolates Surtidos",
            sku: "CHO-BOX-12",
            description: "Gift box, 12 assorted bonbons",
            category: ProductCategory::Chocolates,
            unit: ProductUnit::Box,
            price_cents: 18900,
            cost_cents: 11000,
            stock: 35,
            min_stock: 10,
            supplier_id: "sup-vega",
            supplier_name: "Dulces Vega S.A. de C.V.",
        },
        Row {
            id: "prod-gomitas",
            name: "Gomitas Surtidas 500g",
            sku: "GUM-500",
            description: "Assorted fruit gummies, resealable bag",
            category: ProductCategory::Gummies,
            unit: ProductUnit::Bag,
            price_cents: 6500,
            cost_cents: 3900,
            stock: 80,
            min_stock: 20,
            supplier_id: "sup-golosinas",
            supplier_name: "Golosinas Mexicanas",
        },
        Row {
            id: "prod-paleta-tam",
            name: "Paleta de Tamarindo",
            sku: "LOL-TAM",
            description: "Tamarind lollipop with chili coating",
            category: ProductCategory::Lollipops,
            unit: ProductUnit::Piece,
            price_cents: 800,
            cost_cents: 350,
            stock: 400,
            min_stock: 100,
            supplier_id: "sup-golosinas",
            supplier_name: "Golosinas Mexicanas",
        },
        Row {
            id: "prod-duro-menta",
            name: "Caramelo Macizo de Menta 1kg",
            sku: "HRD-MEN-1K",
            description: "Hard mint candy, bulk kilogram",
            category: ProductCategory::HardCandy,
            unit: ProductUnit::Kilogram,
            price_cents: 9900,
            cost_cents: 6200,
            stock: 18,
            min_stock: 25,
            supplier_id: "sup-delnorte",
            supplier_name: "Distribuidora Del Norte",
        },
        Row {
            id: "prod-bombones",
            name: "Bombones Extra Grandes 250g",
            sku: "MAR-250",
            description: "Oversized marshmallows for hot drinks",
            category: ProductCategory::Marshmallows,
            unit: ProductUnit::Bag,
            price_cents: 4200,
            cost_cents: 2500,
            stock: 60,
            min_stock: 15,
            supplier_id: "sup-delnorte",
            supplier_name: "Distribuidora Del Norte",
        },
        Row {
            id: "prod-chicle",
            name: "Chicles de Canela Display 60pz",
            sku: "GUM-CAN-60",
            description: "Cinnamon gum, counter display",
            category: ProductCategory::Gum,
            unit: ProductUnit::Display,
            price_cents: 7800,
            cost_cents: 4800,
            stock: 22,
            min_stock: 8,
            supplier_id: "sup-golosinas",
            supplier_name: "Golosinas Mexicanas",
        },
        Row {
            id: "prod-refresco",
            name: "Refresco de Cola 600ml",
            sku: "BEV-COL-600",
            description: "Cola soft drink, single bottle",
            category: ProductCategory::Beverages,
            unit: ProductUnit::Piece,
            price_cents: 1900,
            cost_cents: 1100,
            stock: 150,
            min_stock: 40,
            supplier_id: "sup-delnorte",
            supplier_name: "Distribuidora Del Norte",
        },
        Row {
            id: "prod-calavera",
            name: "Calaveras de Azúcar",
            sku: "SEA-CAL",
            description: "Sugar skulls for Día de Muertos",
            category: ProductCategory::Seasonal,
            unit: ProductUnit::Piece,
            price_cents: 3500,
            cost_cents: 1500,
            stock: 0,
            min_stock: 20,
            supplier_id: "sup-vega",
            supplier_name: "Dulces Vega S.A. de C.V.",
        },
    ];

    rows.into_iter()
        .map(|row| {
            NewProduct {
                name: row.name.to_string(),
                sku: row.sku.to_string(),
                description: row.description.to_string(),
                category: row.category,
                unit: row.unit,
                price_cents: row.price_cents,
                cost_cents: row.cost_cents,
                stock: row.stock,
                min_stock: row.min_stock,
                supplier_id: row.supplier_id.to_string(),
                supplier_name: row.supplier_name.to_string(),
            }
            .into_product(row.id.to_string(), now)
        })
        .collect()
}

// =============================================================================
// Branch Network
// =============================================================================

fn seed_branches(now: DateTime<Utc>) -> Vec<Branch> {
    let rows: Vec<(&str, &str, &str, &str, &str, &str, u32)> = vec![
        (
            "branch-centro",
            "Sucursal Centro",
            "CEN",
            "Av. 20 de Noviembre 512, Centro, Durango",
            "6188125060",
            "Carlos Mendoza",
            2,
        ),
        (
            "branch-guadiana",
            "Sucursal Guadiana",
            "GUA",
            "Blvd. Domingo Arrieta 1420, Durango",
            "6188347721",
            "Patricia Salas",
            1,
        ),
    ];

    rows.into_iter()
        .map(|(id, name, code, address, phone, manager_name, warehouse_count)| {
            let mut branch = NewBranch {
                name: name.to_string(),
                code: code.to_string(),
                address: address.to_string(),
                phone: phone.to_string(),
                manager_name: manager_name.to_string(),
                opening_time: "09:00".to_string(),
                closing_time: "21:00".to_string(),
            }
            .into_branch(id.to_string(), now);
            // Matches the rows in seed_warehouses
            branch.warehouse_count = warehouse_count;
            branch
        })
        .collect()
}

fn seed_warehouses(now: DateTime<Utc>) -> Vec<Warehouse> {
    let rows: Vec<(&str, &str, &str, &str, WarehouseType, i32, i32)> = vec![
        (
            "wh-central",
            "Bodega Central",
            "branch-centro",
            "Sucursal Centro",
            WarehouseType::Central,
            10_000,
            608,
        ),
        (
            "wh-centro-back",
            "Trastienda Centro",
            "branch-centro",
            "Sucursal Centro",
            WarehouseType::Branch,
            1_500,
            120,
        ),
        (
            "wh-ruta-norte",
            "Camión Ruta Norte",
            "branch-guadiana",
            "Sucursal Guadiana",
            WarehouseType::RouteTruck,
            800,
            700,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, name, branch_id, branch_name, warehouse_type, capacity, current_stock)| {
                NewWarehouse {
                    name: name.to_string(),
                    branch_id: branch_id.to_string(),
                    branch_name: branch_name.to_string(),
                    warehouse_type,
                    capacity,
                    current_stock,
                }
                .into_warehouse(id.to_string(), now)
            },
        )
        .collect()
}

// =============================================================================
// Customers
// =============================================================================

fn seed_customers(now: DateTime<Utc>) -> Vec<Customer> {
    let rows: Vec<(&str, &str, &str, &str, &str, CustomerType)> = vec![
        (
            "cust-esquina",
            "Abarrotes La Esquina",
            "laesquina@hotmail.com",
            "6181002233",
            "Av. 20 de Noviembre 512, Durango",
            CustomerType::Route,
        ),
        (
            "cust-maria",
            "María López",
            "maria.lopez@example.com",
            "6181234567",
            "Calle Aquiles Serdán 214, Durango",
            CustomerType::Retail,
        ),
        (
            "cust-portal",
            "Dulcería El Portal",
            "compras@elportal.mx",
            "6188904412",
            "Esquina Morelos y Negrete, Durango",
            CustomerType::Wholesale,
        ),
        (
            "cust-cine",
            "Dulcería del Cine Durango",
            "dulceria@cinedurango.mx",
            "6184457890",
            "Plaza Bella local 22, Durango",
            CustomerType::Wholesale,
        ),
        (
            "cust-hotel",
            "Hotel Plaza Catedral",
            "amenidades@plazacatedral.mx",
            "6188113300",
            "Calle Constitución 216, Centro, Durango",
            CustomerType::Wholesale,
        ),
    ];

    rows.into_iter()
        .map(|(id, name, email, phone, address, customer_type)| {
            NewCustomer {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
                customer_type,
            }
            .into_customer(id.to_string(), now)
        })
        .collect()
}

// =============================================================================
// Orders
// =============================================================================

fn item(
    product_id: &str,
    product_name: &str,
    quantity: i32,
    unit_price_cents: i64,
) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        unit_price_cents,
        line_total_cents: unit_price_cents * quantity as i64,
    }
}

fn seed_orders(now: DateTime<Utc>) -> Vec<Order> {
    let mut completed = NewOrder {
        order_number: "ORD-1001".to_string(),
        warehouse_id: "wh-centro-back".to_string(),
        warehouse_name: "Trastienda Centro".to_string(),
        customer_id: "cust-maria".to_string(),
        customer_name: "María López".to_string(),
        items: vec![
            item("prod-choco-bar", "Barra de Chocolate con Leche 45g", 3, 2500),
            item("prod-gomitas", "Gomitas Surtidas 500g", 1, 6500),
        ],
        subtotal_cents: 14_000,
        tax_cents: 2_240,
        discount_cents: 0,
        total_cents: 16_240,
        notes: None,
    }
    .into_order("ord-1001".to_string(), now);
    completed.set_status(OrderStatus::Confirmed, now);
    completed.set_status(OrderStatus::Completed, now);

    let pending = NewOrder {
        order_number: "ORD-1002".to_string(),
        warehouse_id: "wh-central".to_string(),
        warehouse_name: "Bodega Central".to_string(),
        customer_id: "cust-portal".to_string(),
        customer_name: "Dulcería El Portal".to_string(),
        items: vec![item("prod-choco-caja", "Caja de Chocolates Surtidos", 2, 18_900)],
        subtotal_cents: 37_800,
        tax_cents: 6_048,
        discount_cents: 3_780,
        total_cents: 40_068,
        notes: Some("Wholesale discount applied".to_string()),
    }
    .into_order("ord-1002".to_string(), now);

    vec![completed, pending]
}

fn seed_online_orders(now: DateTime<Utc>) -> Vec<OnlineOrder> {
    let mut processing = NewOnlineOrder {
        order_number: "WEB-2001".to_string(),
        customer_id: "cust-maria".to_string(),
        customer_name: "María López".to_string(),
        email: "maria.lopez@example.com".to_string(),
        phone: "6181234567".to_string(),
        shipping_address: "Calle Aquiles Serdán 214, Durango".to_string(),
        items: vec![item("prod-gomitas", "Gomitas Surtidas 500g", 2, 6_500)],
        subtotal_cents: 13_000,
        tax_cents: 2_080,
        discount_cents: 0,
        shipping_cents: 9_900,
        total_cents: 24_980,
    }
    .into_online_order("web-2001".to_string(), now);
    processing.set_status(OnlineOrderStatus::Processing, now);

    vec![processing]
}

fn seed_route_orders(now: DateTime<Utc>) -> Vec<RouteOrder> {
    let mut in_transit = NewRouteOrder {
        order_number: "RUT-3001".to_string(),
        route_name: "Ruta Centro".to_string(),
        driver_name: "Jorge Ramírez".to_string(),
        customer_id: "cust-esquina".to_string(),
        customer_name: "Abarrotes La Esquina".to_string(),
        delivery_address: "Av. 20 de Noviembre 512, Durango".to_string(),
        items: vec![item("prod-paleta-tam", "Paleta de Tamarindo", 40, 800)],
        subtotal_cents: 32_000,
        tax_cents: 5_120,
        discount_cents: 1_600,
        total_cents: 35_520,
        notes: Some("Leave with the owner only".to_string()),
    }
    .into_route_order("rut-3001".to_string(), now);
    in_transit.set_status(RouteOrderStatus::InTransit, now);

    vec![in_transit]
}

// =============================================================================
// Inventory
// =============================================================================

fn seed_inventory(now: DateTime<Utc>) -> Vec<InventoryItem> {
    struct Row {
        id: &'static str,
        product_id: &'static str,
        product_name: &'static str,
        product_sku: &'static str,
        warehouse_id: &'static str,
        warehouse_name: &'static str,
        quantity: i32,
        min_stock: i32,
        max_stock: i32,
        moved: bool,
    }

    let rows = vec![
        Row {
            id: "inv-central-choco",
            product_id: "prod-choco-bar",
            product_name: "Barra de Chocolate con Leche 45g",
            product_sku: "CHO-045",
            warehouse_id: "wh-central",
            warehouse_name: "Bodega Central",
            quantity: 500,
            min_stock: 100,
            max_stock: 2_000,
            moved: true,
        },
        Row {
            id: "inv-central-gomitas",
            product_id: "prod-gomitas",
            product_name: "Gomitas Surtidas 500g",
            product_sku: "GUM-500",
            warehouse_id: "wh-central",
            warehouse_name: "Bodega Central",
            quantity: 90,
            min_stock: 100,
            max_stock: 1_500,
            moved: false,
        },
        Row {
            id: "inv-central-menta",
            product_id: "prod-duro-menta",
            product_name: "Caramelo Macizo de Menta 1kg",
            product_sku: "HRD-MEN-1K",
            warehouse_id: "wh-central",
            warehouse_name: "Bodega Central",
            quantity: 18,
            min_stock: 25,
            max_stock: 200,
            moved: true,
        },
        Row {
            id: "inv-centro-choco",
            product_id: "prod-choco-bar",
            product_name: "Barra de Chocolate con Leche 45g",
            product_sku: "CHO-045",
            warehouse_id: "wh-centro-back",
            warehouse_name: "Trastienda Centro",
            quantity: 120,
            min_stock: 30,
            max_stock: 300,
            moved: false,
        },
        Row {
            id: "inv-centro-paleta",
            product_id: "prod-paleta-tam",
            product_name: "Paleta de Tamarindo",
            product_sku: "LOL-TAM",
            warehouse_id: "wh-centro-back",
            warehouse_name: "Trastienda Centro",
            quantity: 0,
            min_stock: 50,
            max_stock: 600,
            moved: true,
        },
        Row {
            id: "inv-ruta-paleta",
            product_id: "prod-paleta-tam",
            product_name: "Paleta de Tamarindo",
            product_sku: "LOL-TAM",
            warehouse_id: "wh-ruta-norte",
            warehouse_name: "Camión Ruta Norte",
            quantity: 700,
            min_stock: 40,
            max_stock: 500,
            moved: true,
        },
    ];

    rows.into_iter()
        .map(|row| {
            let mut inventory_item = NewInventoryItem {
                product_id: row.product_id.to_string(),
                product_name: row.product_name.to_string(),
                product_sku: row.product_sku.to_string(),
                warehouse_id: row.warehouse_id.to_string(),
                warehouse_name: row.warehouse_name.to_string(),
                quantity: row.quantity,
                min_stock: row.min_stock,
                max_stock: row.max_stock,
            }
            .into_inventory_item(row.id.to_string(), now);
            if row.moved {
                inventory_item.last_movement_at = Some(now);
            }
            inventory_item
        })
        .collect()
}

fn seed_movements(now: DateTime<Utc>) -> Vec<InventoryMovement> {
    let rows: Vec<(&str, &str, &str, &str, &str, MovementType, i32, Option<&str>, Option<&str>)> = vec![
        (
            "mov-intake-choco",
            "inv-central-choco",
            "Barra de Chocolate con Leche 45g",
            "wh-central",
            "Bodega Central",
            MovementType::In,
            500,
            Some("initial intake"),
            Some("PO-7731"),
        ),
        (
            "mov-dispatch-paleta",
            "inv-centro-paleta",
            "Paleta de Tamarindo",
            "wh-centro-back",
            "Trastienda Centro",
            MovementType::Out,
            -40,
            Some("route dispatch"),
            Some("RUT-3001"),
        ),
        (
            "mov-adjust-menta",
            "inv-central-menta",
            "Caramelo Macizo de Menta 1kg",
            "wh-central",
            "Bodega Central",
            MovementType::Adjustment,
            -7,
            Some("damaged in storage"),
            None,
        ),
        (
            "mov-load-ruta",
            "inv-ruta-paleta",
            "Paleta de Tamarindo",
            "wh-ruta-norte",
            "Camión Ruta Norte",
            MovementType::Transfer,
            200,
            Some("truck loading"),
            Some("TRF-0045"),
        ),
    ];

    rows.into_iter()
        .map(
            |(id, inventory_item_id, product_name, warehouse_id, warehouse_name, movement_type, quantity, reason, reference)| {
                NewInventoryMovement {
                    inventory_item_id: inventory_item_id.to_string(),
                    product_name: product_name.to_string(),
                    warehouse_id: warehouse_id.to_string(),
                    warehouse_name: warehouse_name.to_string(),
                    movement_type,
                    quantity,
                    reason: reason.map(str::to_string),
                    reference: reference.map(str::to_string),
                }
                .into_movement(id.to_string(), now)
            },
        )
        .collect()
}

fn seed_alerts(now: DateTime<Utc>) -> Vec<InventoryAlert> {
    let low_gomitas = NewInventoryAlert {
        inventory_item_id: "inv-central-gomitas".to_string(),
        product_name: "Gomitas Surtidas 500g".to_string(),
        warehouse_name: "Bodega Central".to_string(),
        alert_type: AlertType::LowStock,
        message: "Gomitas Surtidas 500g at 90 units, minimum is 100".to_string(),
    }
    .into_alert("alert-gomitas".to_string(), now);
    let out_paleta = NewInventoryAlert {
        inventory_item_id: "inv-centro-paleta".to_string(),
        product_name: "Paleta de Tamarindo".to_string(),
        warehouse_name: "Trastienda Centro".to_string(),
        alert_type: AlertType::OutOfStock,
        message: "Paleta de Tamarindo is out of stock at Trastienda Centro".to_string(),
    }
    .into_alert("alert-paleta".to_string(), now);
    let mut over_ruta = NewInventoryAlert {
        inventory_item_id: "inv-ruta-paleta".to_string(),
        product_name: "Paleta de Tamarindo".to_string(),
        warehouse_name: "Camión Ruta Norte".to_string(),
        alert_type: AlertType::OverStock,
        message: "Camión Ruta Norte holds 700 units, maximum is 500".to_string(),
    }
    .into_alert("alert-ruta".to_string(), now);
    let mut resolved_menta = NewInventoryAlert {
        inventory_item_id: "inv-central-menta".to_string(),
        product_name: "Caramelo Macizo de Menta 1kg".to_string(),
        warehouse_name: "Bodega Central".to_string(),
        alert_type: AlertType::LowStock,
        message: "Caramelo Macizo de Menta 1kg at 25 units, minimum is 25".to_string(),
    }
    .into_alert("alert-menta".to_string(), now);

    // History the console would have produced already
    over_ruta.status = AlertStatus::Acknowledged;
    resolved_menta.status = AlertStatus::Resolved;
    resolved_menta.resolved_at = Some(now);

    vec![low_gomitas, out_paleta, over_ruta, resolved_menta]
}

// =============================================================================
// Unit Tests
// =============================================================================
