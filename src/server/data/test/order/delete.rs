use super::*;

/// Tests deleting an order with discount lines.
///
/// Verifies that the order and its discount lines are removed while the dish
/// remains.
///
/// Expected: Ok with order and discount lines deleted
#[tokio::test]
async fn deletes_order_and_its_discounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, dish, _) = factory::helpers::create_discount_with_dependencies(db).await?;

    OrderRepository::new(db).delete(order.id).await?;

    assert!(entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::DiscountDetail::find().count(db).await?, 0);
    assert!(entity::prelude::Dish::find_by_id(dish.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = OrderRepository::new(db).delete(5).await.unwrap_err();

    assert_eq!(err.to_string(), "Order with id 5 not found");

    Ok(())
}
