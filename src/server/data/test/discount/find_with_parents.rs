use super::*;

/// Tests the joined lookup of a discount with its order and dish.
///
/// Expected: Ok(Some) with the order's discount lines and the dish base price
#[tokio::test]
async fn loads_order_and_dish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;
    let dish = factory::dish::DishFactory::new(db)
        .price(18.0)
        .build()
        .await?;
    factory::discount_detail::DiscountDetailFactory::new(db, order.id, dish.id)
        .discount(10.0)
        .build()
        .await?;

    let record = DiscountRepository::new(db)
        .find_with_parents(order.id, dish.id)
        .await?
        .unwrap();

    assert_eq!(record.detail.discount, 10.0);
    assert_eq!(record.order.id, order.id);
    assert_eq!(record.order.discount_details.len(), 1);
    assert_eq!(record.dish.price, 18.0);

    Ok(())
}

/// Tests the joined lookup for a pair without a discount.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_discount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;
    let dish = factory::create_dish(db).await?;

    let record = DiscountRepository::new(db)
        .find_with_parents(order.id, dish.id)
        .await?;

    assert!(record.is_none());

    Ok(())
}
