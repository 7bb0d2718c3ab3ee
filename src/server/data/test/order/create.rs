use super::*;

/// Tests creating a new order.
///
/// Verifies that the repository persists the table number and final price and
/// that the order can be re-fetched with identical fields.
///
/// Expected: Ok with order created and no discount lines
#[tokio::test]
async fn creates_order_and_round_trips() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let created = repo
        .create(CreateOrderParam {
            table_number: 4,
            final_price: 27.5,
        })
        .await?;

    assert_eq!(created.table_number, 4);
    assert_eq!(created.final_price, 27.5);
    assert!(created.discount_details.is_empty());

    let fetched = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.table_number, created.table_number);
    assert_eq!(fetched.final_price, created.final_price);

    Ok(())
}

/// Tests creating several orders.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let first = repo
        .create(CreateOrderParam {
            table_number: 1,
            final_price: 0.0,
        })
        .await?;
    let second = repo
        .create(CreateOrderParam {
            table_number: 1,
            final_price: 0.0,
        })
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Order::find().count(db).await?, 2);

    Ok(())
}
