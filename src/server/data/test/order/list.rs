use super::*;

/// Tests listing orders.
///
/// Verifies that every order is returned in ID order together with only its own
/// discount lines.
///
/// Expected: Ok with both orders
#[tokio::test]
async fn lists_orders_with_their_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, _, _) = factory::helpers::create_discount_with_dependencies(db).await?;
    let other = factory::create_order(db).await?;

    let orders = OrderRepository::new(db).list().await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].discount_details.len(), 1);
    assert_eq!(orders[1].id, other.id);
    assert!(orders[1].discount_details.is_empty());

    Ok(())
}

/// Tests listing orders on an empty table.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = OrderRepository::new(db).list().await?;

    assert!(orders.is_empty());

    Ok(())
}
