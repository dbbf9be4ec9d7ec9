//! # Store Management Operations
//!
//! Catalog CRUD for the store-management view. These are the only api
//! functions that validate input: data entering the catalog must be clean
//! because everything downstream (cart snapshots, order lines) freezes
//! copies of it.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use orchard_core::validation::{validate_name, validate_price_cents, validate_sku, validate_stock};
use orchard_core::{Category, Customer, Product};

use crate::api::AckResponse;
use crate::error::ApiError;
use crate::state::RegisterState;

/// Products, optionally filtered to one category.
pub fn list_products(state: &RegisterState, category_id: Option<&str>) -> Vec<Product> {
    debug!(category = ?category_id, "list_products");

    state.with_register(|r| match category_id {
        Some(id) => r
            .catalog
            .products_in_category(id)
            .into_iter()
            .cloned()
            .collect(),
        None => r.catalog.products.clone(),
    })
}

/// Creates or updates a product.
///
/// An empty id means "create": a UUID is assigned and `created_at`
/// stamped. Field validation runs before anything is written.
pub fn save_product(state: &RegisterState, mut product: Product) -> Result<Product, ApiError> {
    debug!(sku = %product.sku, "save_product");

    validate_sku(&product.sku).map_err(orchard_core::CoreError::from)?;
    validate_name(&product.name).map_err(orchard_core::CoreError::from)?;
    validate_price_cents(product.price_cents).map_err(orchard_core::CoreError::from)?;
    validate_stock(product.stock).map_err(orchard_core::CoreError::from)?;

    let now = Utc::now();
    if product.id.is_empty() {
        product.id = Uuid::new_v4().to_string();
        product.created_at = now;
    }
    product.updated_at = now;

    state.with_register_mut(|r| r.catalog.upsert_product(product.clone()));
    info!(product_id = %product.id, sku = %product.sku, "Product saved");

    Ok(product)
}

/// Removes a product from the catalog. Stale id → `applied: false`.
pub fn delete_product(state: &RegisterState, product_id: &str) -> AckResponse {
    debug!(product_id = %product_id, "delete_product");
    AckResponse::new(state.with_register_mut(|r| r.catalog.remove_product(product_id)))
}

/// All categories in tab order.
pub fn list_categories(state: &RegisterState) -> Vec<Category> {
    debug!("list_categories");
    state.with_register(|r| r.catalog.categories.clone())
}

/// Creates or updates a category (empty id means "create").
pub fn save_category(state: &RegisterState, mut category: Category) -> Result<Category, ApiError> {
    debug!(name = %category.name, "save_category");

    validate_name(&category.name).map_err(orchard_core::CoreError::from)?;

    if category.id.is_empty() {
        category.id = Uuid::new_v4().to_string();
    }

    state.with_register_mut(|r| r.catalog.upsert_category(category.clone()));
    Ok(category)
}

/// Removes a category.
///
/// Refused with `BUSINESS_LOGIC` while any product still references it;
/// stale id → `applied: false`.
pub fn delete_category(state: &RegisterState, category_id: &str) -> Result<AckResponse, ApiError> {
    debug!(category_id = %category_id, "delete_category");

    let applied = state.with_register_mut(|r| r.catalog.remove_category(category_id))?;
    Ok(AckResponse::new(applied))
}

/// All known customers for the picker.
pub fn list_customers(state: &RegisterState) -> Vec<Customer> {
    debug!("list_customers");
    state.with_register(|r| r.catalog.customers.clone())
}

// =============================================================================
// Unit Tests
// =============================================================================
