use super::*;

/// Tests deleting a dish that is referenced by a discount.
///
/// Verifies that the discount lines of the dish are removed while the order
/// remains.
///
/// Expected: Ok with dish and discount lines deleted
#[tokio::test]
async fn deletes_dish_and_its_discounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, dish, _) = factory::helpers::create_discount_with_dependencies(db).await?;

    DishRepository::new(db).delete(dish.id).await?;

    assert_eq!(entity::prelude::Dish::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DiscountDetail::find().count(db).await?, 0);
    assert!(entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a dish that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_dish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = DishRepository::new(db).delete(8).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Dish with id 8 not found");

    Ok(())
}
