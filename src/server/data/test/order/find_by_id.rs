use super::*;

/// Tests finding an order that has discount lines.
///
/// Expected: Ok(Some(Order)) with its discount lines loaded
#[tokio::test]
async fn loads_discount_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, dish, discount) =
        factory::helpers::create_discount_with_dependencies(db).await?;

    let found = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

    assert_eq!(found.id, order.id);
    assert_eq!(found.discount_details.len(), 1);
    assert_eq!(found.discount_details[0].dish_id, dish.id);
    assert_eq!(found.discount_details[0].discount, discount.discount);

    Ok(())
}

/// Tests finding an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = OrderRepository::new(db).find_by_id(404).await?;

    assert!(found.is_none());

    Ok(())
}
