use super::*;

/// Tests a partial order update.
///
/// Verifies that only the provided field changes.
///
/// Expected: Ok with new final price and unchanged table number
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::order::OrderFactory::new(db)
        .table_number(9)
        .final_price(12.0)
        .build()
        .await?;

    let updated = OrderRepository::new(db)
        .update(UpdateOrderParam {
            id: order.id,
            table_number: None,
            final_price: Some(30.0),
        })
        .await?;

    assert_eq!(updated.table_number, 9);
    assert_eq!(updated.final_price, 30.0);
    assert!(updated.updated_at >= order.updated_at);

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Err(RecordNotFound) naming the order and its ID
#[tokio::test]
async fn fails_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db)
        .update(UpdateOrderParam {
            id: 77,
            table_number: Some(1),
            final_price: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Order with id 77 not found");

    Ok(())
}
