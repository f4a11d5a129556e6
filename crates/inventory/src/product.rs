use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// A single stock-keeping record.
///
/// `quantity` and `price` are never negative; every constructor and mutator
/// validates before writing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    product_id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> DomainResult<Self> {
        if quantity < 0 || !is_non_negative(price) {
            return Err(DomainError::validation(
                "quantity and price must be non-negative values",
            ));
        }
        Ok(Self {
            product_id: product_id.into(),
            name: name.into(),
            quantity,
            price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn update_quantity(&mut self, new_quantity: i64) -> DomainResult<()> {
        if new_quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        self.quantity = new_quantity;
        Ok(())
    }

    pub fn update_price(&mut self, new_price: f64) -> DomainResult<()> {
        if !is_non_negative(new_price) {
            return Err(DomainError::validation("price cannot be negative"));
        }
        self.price = new_price;
        Ok(())
    }

    /// Human-readable one-line summary, e.g.
    /// `Product(1, 'Laptop', qty=10, price=75000.00)`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

// NaN fails `>=` as well, so it is rejected along with negatives.
fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product({}, '{}', qty={}, price={:.2})",
            self.product_id, self.name, self.quantity, self.price
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
