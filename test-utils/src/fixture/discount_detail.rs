//! Discount detail fixtures for creating in-memory test data.

use entity::discount_detail;

/// Default discount percentage.
pub const DEFAULT_DISCOUNT: f64 = 2.0;

/// Creates a discount detail entity model with default values.
///
/// # Default Values
/// - order_id: `1`
/// - dish_id: `2`
/// - discount: `2.0`
pub fn entity() -> discount_detail::Model {
    entity_builder().build()
}

/// Creates a discount detail entity builder for customization.
pub fn entity_builder() -> DiscountDetailEntityBuilder {
    DiscountDetailEntityBuilder::default()
}

/// Builder for creating customized discount detail entity models.
pub struct DiscountDetailEntityBuilder {
    order_id: i32,
    dish_id: i32,
    discount: f64,
}

impl Default for DiscountDetailEntityBuilder {
    fn default() -> Self {
        Self {
            order_id: 1,
            dish_id: 2,
            discount: DEFAULT_DISCOUNT,
        }
    }
}

impl DiscountDetailEntityBuilder {
    pub fn order_id(mut self, order_id: i32) -> Self {
        self.order_id = order_id;
        self
    }

    pub fn dish_id(mut self, dish_id: i32) -> Self {
        self.dish_id = dish_id;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Builds and returns the discount detail entity model.
    pub fn build(self) -> discount_detail::Model {
        discount_detail::Model {
            order_id: self.order_id,
            dish_id: self.dish_id,
            discount: self.discount,
        }
    }
}
