//! Order fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::order;

use super::fixed_timestamp;

/// Default table number for orders.
pub const DEFAULT_TABLE_NUMBER: i32 = 2;

/// Default final price for orders.
pub const DEFAULT_FINAL_PRICE: f64 = 14.0;

/// Creates an order entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - table_number: `2`
/// - final_price: `14.0`
/// - created_at / updated_at: `fixed_timestamp()`
pub fn entity() -> order::Model {
    entity_builder().build()
}

/// Creates an order entity builder for customization.
pub fn entity_builder() -> OrderEntityBuilder {
    OrderEntityBuilder::default()
}

/// Builder for creating customized order entity models.
pub struct OrderEntityBuilder {
    id: i32,
    table_number: i32,
    final_price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for OrderEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            table_number: DEFAULT_TABLE_NUMBER,
            final_price: DEFAULT_FINAL_PRICE,
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
        }
    }
}

impl OrderEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn table_number(mut self, table_number: i32) -> Self {
        self.table_number = table_number;
        self
    }

    pub fn final_price(mut self, final_price: f64) -> Self {
        self.final_price = final_price;
        self
    }

    /// Builds and returns the order entity model.
    pub fn build(self) -> order::Model {
        order::Model {
            id: self.id,
            table_number: self.table_number,
            final_price: self.final_price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
