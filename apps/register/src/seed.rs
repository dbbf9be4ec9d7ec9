//! # Seed Data
//!
//! The demo store: four categories, twelve products, five customers.
//! Prices are in cents; the Hoodie seeds out of stock on purpose so the
//! out-of-stock path is visible in the UI without any setup.

use chrono::Utc;

use orchard_core::{Catalog, Category, Customer, Product};

use crate::state::Register;

/// Builds the demo catalog.
pub fn demo_catalog() -> Catalog {
    let now = Utc::now();

    let product = |id: &str,
                   name: &str,
                   category_id: &str,
                   price_cents: i64,
                   sku: &str,
                   stock: i64,
                   image: u32| Product {
        id: id.to_string(),
        name: name.to_string(),
        category_id: category_id.to_string(),
        sku: sku.to_string(),
        price_cents,
        stock,
        image_url: format!("https://picsum.photos/id/{}/200", image),
        unit_label: "each".to_string(),
        created_at: now,
        updated_at: now,
    };

    let customer = |id: &str, name: &str, email: &str, points: i64, exempt: bool| Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        loyalty_points: points,
        tax_exempt: exempt,
    };

    Catalog {
        categories: vec![
            Category { id: "beverages".to_string(), name: "Beverages".to_string() },
            Category { id: "snacks".to_string(), name: "Snacks".to_string() },
            Category { id: "electronics".to_string(), name: "Electronics".to_string() },
            Category { id: "apparel".to_string(), name: "Apparel".to_string() },
        ],
        products: vec![
            product("p1", "Espresso", "beverages", 350, "BEV-001", 100, 225),
            product("p2", "Latte", "beverages", 450, "BEV-002", 80, 305),
            product("p3", "Potato Chips", "snacks", 225, "SNK-001", 150, 102),
            product("p4", "Chocolate Bar", "snacks", 175, "SNK-002", 200, 431),
            product("p5", "Headphones", "electronics", 7999, "ELE-001", 30, 119),
            product("p6", "USB-C Cable", "electronics", 1200, "ELE-002", 75, 512),
            product("p7", "T-Shirt", "apparel", 2500, "APP-001", 50, 1080),
            product("p8", "Beanie", "apparel", 1850, "APP-002", 40, 1078),
            product("p9", "Sparkling Water", "beverages", 200, "BEV-003", 120, 1015),
            product("p10", "Granola Bar", "snacks", 150, "SNK-003", 300, 292),
            product("p11", "Mouse", "electronics", 4500, "ELE-003", 25, 0),
            product("p12", "Hoodie", "apparel", 5500, "APP-003", 0, 1069),
        ],
        customers: vec![
            customer("c1", "Alice Johnson", "alice@example.com", 1250, false),
            customer("c2", "Bob Williams", "bob@example.com", 780, false),
            customer("c3", "Charlie Brown", "charlie@example.com", 2400, false),
            customer("c4", "Diana Prince", "diana@example.com", 500, false),
            customer("c5", "Riverside School District", "purchasing@riverside.example.com", 0, true),
        ],
    }
}

/// A fresh register seeded with the demo catalog.
pub fn demo_register() -> Register {
    Register {
        catalog: demo_catalog(),
        ..Register::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape() {
        let catalog = demo_catalog();

        assert_eq!(catalog.categories.len(), 4);
        assert_eq!(catalog.products.len(), 12);
        assert_eq!(catalog.customers.len(), 5);

        // every product references a seeded category
        for product in &catalog.products {
            assert!(catalog.category(&product.category_id).is_some());
        }

        // the deliberate out-of-stock product
        assert_eq!(catalog.product("p12").unwrap().stock, 0);

        // exactly one tax-exempt demo customer
        assert_eq!(catalog.customers.iter().filter(|c| c.tax_exempt).count(), 1);
    }
}
