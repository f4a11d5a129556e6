use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// Owning collection of products keyed by their id.
///
/// Invariant: every key in `products` equals the id of its product, and
/// `order` holds exactly the keys of `products` in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: HashMap<ProductId, Product>,
    order: Vec<ProductId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, product_id: impl Into<ProductId>) -> bool {
        self.products.contains_key(&product_id.into())
    }

    pub fn get_product(&self, product_id: impl Into<ProductId>) -> Option<&Product> {
        self.products.get(&product_id.into())
    }

    /// Take ownership of `product`. Rejected (and dropped) if its id is taken.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        let id = *product.id();
        if self.products.contains_key(&id) {
            return Err(DomainError::duplicate_key(id));
        }
        self.products.insert(id, product);
        self.order.push(id);
        Ok(())
    }

    /// Remove the product and hand it back to the caller.
    pub fn remove_product(&mut self, product_id: impl Into<ProductId>) -> DomainResult<Product> {
        let id = product_id.into();
        let product = self
            .products
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(id))?;
        self.order.retain(|existing| *existing != id);
        Ok(product)
    }

    /// Apply optional quantity and price changes.
    ///
    /// Fields are validated and applied independently, quantity first: a
    /// rejected quantity stops before price is looked at, while a rejected
    /// price leaves an already-applied quantity in place.
    pub fn update_product(
        &mut self,
        product_id: impl Into<ProductId>,
        new_quantity: Option<i64>,
        new_price: Option<f64>,
    ) -> DomainResult<()> {
        let id = product_id.into();
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(id))?;

        if let Some(quantity) = new_quantity {
            product.update_quantity(quantity)?;
        }
        if let Some(price) = new_price {
            product.update_price(price)?;
        }
        Ok(())
    }

    /// Snapshot of all products in insertion order.
    pub fn list_products(&self) -> Vec<&Product> {
        self.order
            .iter()
            .filter_map(|id| self.products.get(id))
            .collect()
    }
}
