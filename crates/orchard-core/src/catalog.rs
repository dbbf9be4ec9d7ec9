//! # Catalog
//!
//! In-memory collections of products, categories, and customers, plus the
//! single stock-mutation point used by the order lifecycle.
//!
//! ## Stock Discipline
//! `adjust_stock` is the only way stock changes outside of a store-management
//! edit. Checkout calls it with a negative delta, cancel with the matching
//! positive delta; everything else (cart, split, transfer, delete) leaves
//! stock alone.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Customer, Product};

/// The store catalog: products, categories, and known customers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Products in display order.
    pub products: Vec<Product>,

    /// Categories in tab order.
    pub categories: Vec<Category>,

    /// Known customers for the picker.
    pub customers: Vec<Customer>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Inserts a new product or replaces the one with the same id.
    pub fn upsert_product(&mut self, product: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        } else {
            self.products.push(product);
        }
    }

    /// Removes a product. Returns false (and changes nothing) for a stale id.
    pub fn remove_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Products belonging to a category, in catalog order.
    pub fn products_in_category(&self, category_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id)
            .collect()
    }

    /// Adjusts a product's stock by a signed delta, flooring at zero.
    ///
    /// Returns false for a stale product id. The floor never engages under
    /// normal flow (checkout quantities were validated against stock by the
    /// cart); it guards store-management edits that shrink stock while a
    /// cart is open.
    pub fn adjust_stock(&mut self, product_id: &str, delta: i64) -> bool {
        match self.products.iter_mut().find(|p| p.id == product_id) {
            Some(product) => {
                product.stock = (product.stock + delta).max(0);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Inserts a new category or replaces the one with the same id.
    pub fn upsert_category(&mut self, category: Category) {
        if let Some(existing) = self.categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category;
        } else {
            self.categories.push(category);
        }
    }

    /// Removes a category.
    ///
    /// ## Behavior
    /// - still assigned to one or more products: refused with
    ///   [`CoreError::CategoryInUse`] - the one operation in the engine that
    ///   rejects instead of clamping or no-opping
    /// - stale id: `Ok(false)`, nothing changes
    /// - otherwise: removed, `Ok(true)`
    pub fn remove_category(&mut self, id: &str) -> CoreResult<bool> {
        let in_use = self.products.iter().filter(|p| p.category_id == id).count();
        if in_use > 0 {
            return Err(CoreError::CategoryInUse {
                category_id: id.to_string(),
                product_count: in_use,
            });
        }

        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        Ok(self.categories.len() != before)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Looks up a customer by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Inserts a new customer or replaces the one with the same id.
    pub fn upsert_customer(&mut self, customer: Customer) {
        if let Some(existing) = self.customers.iter_mut().find(|c| c.id == customer.id) {
            *existing = customer;
        } else {
            self.customers.push(customer);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
