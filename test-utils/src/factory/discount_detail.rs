//! Discount detail factory for creating test discount entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test discount details with customizable fields.
///
/// The referenced order and dish must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discount_detail::DiscountDetailFactory;
///
/// let discount = DiscountDetailFactory::new(&db, order.id, dish.id)
///     .discount(15.0)
///     .build()
///     .await?;
/// ```
pub struct DiscountDetailFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::discount_detail::Model,
}

impl<'a> DiscountDetailFactory<'a> {
    /// Creates a new DiscountDetailFactory for the given order and dish.
    pub fn new(db: &'a DatabaseConnection, order_id: i32, dish_id: i32) -> Self {
        let entity = fixture::discount_detail::entity_builder()
            .order_id(order_id)
            .dish_id(dish_id)
            .build();

        Self { db, entity }
    }

    /// Sets the discount percentage.
    pub fn discount(mut self, discount: f64) -> Self {
        self.entity.discount = discount;
        self
    }

    /// Builds and inserts the discount detail entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discount_detail::Model)` - Created discount detail entity
    /// - `Err(DbErr)` - Database error during insert (missing parent, duplicate pair)
    pub async fn build(self) -> Result<entity::discount_detail::Model, DbErr> {
        entity::discount_detail::ActiveModel {
            order_id: ActiveValue::Set(self.entity.order_id),
            dish_id: ActiveValue::Set(self.entity.dish_id),
            discount: ActiveValue::Set(self.entity.discount),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a discount detail with the default discount for the given pair.
pub async fn create_discount_detail(
    db: &DatabaseConnection,
    order_id: i32,
    dish_id: i32,
) -> Result<entity::discount_detail::Model, DbErr> {
    DiscountDetailFactory::new(db, order_id, dish_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_discount_with_dependencies;

    #[tokio::test]
    async fn creates_discount_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_ordering_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (order, dish, discount) = create_discount_with_dependencies(db).await?;

        assert_eq!(discount.order_id, order.id);
        assert_eq!(discount.dish_id, dish.id);
        assert_eq!(discount.discount, fixture::discount_detail::DEFAULT_DISCOUNT);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_pair() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_ordering_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (order, dish, _) = create_discount_with_dependencies(db).await?;
        let result = create_discount_detail(db, order.id, dish.id).await;

        assert!(result.is_err());

        Ok(())
    }
}
