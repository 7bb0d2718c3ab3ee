//! Dish fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::dish;

use super::fixed_timestamp;

/// Default dish name.
pub const DEFAULT_NAME: &str = "Fish filet";

/// Default dish base price.
pub const DEFAULT_PRICE: f64 = 10.0;

/// Creates a dish entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Fish filet"`
/// - price: `10.0`
/// - created_at / updated_at: `fixed_timestamp()`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let dish = fixture::dish::entity();
/// assert_eq!(dish.price, 10.0);
/// ```
pub fn entity() -> dish::Model {
    entity_builder().build()
}

/// Creates a dish entity builder for customization.
pub fn entity_builder() -> DishEntityBuilder {
    DishEntityBuilder::default()
}

/// Builder for creating customized dish entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct DishEntityBuilder {
    id: i32,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for DishEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            price: DEFAULT_PRICE,
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
        }
    }
}

impl DishEntityBuilder {
    /// Sets the dish ID.
    ///
    /// # Arguments
    /// - `id` - Dish ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the dish name.
    ///
    /// # Arguments
    /// - `name` - Menu name for the dish
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the dish base price.
    ///
    /// # Arguments
    /// - `price` - Base price in currency units
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and returns the dish entity model.
    pub fn build(self) -> dish::Model {
        dish::Model {
            id: self.id,
            name: self.name,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
