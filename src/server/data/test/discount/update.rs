use super::*;

/// Tests updating the percentage of an existing discount.
///
/// Expected: Ok with new percentage stored
#[tokio::test]
async fn updates_discount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, dish, _) = factory::helpers::create_discount_with_dependencies(db).await?;

    let repo = DiscountRepository::new(db);
    let updated = repo
        .update(UpdateDiscountParam {
            order_id: order.id,
            dish_id: dish.id,
            discount: 12.0,
        })
        .await?;

    assert_eq!(updated.discount, 12.0);

    let stored = repo.find_with_parents(order.id, dish.id).await?.unwrap();
    assert_eq!(stored.detail.discount, 12.0);

    Ok(())
}

/// Tests updating a pair without a discount.
///
/// Expected: Err(RecordNotFound) naming the pair
#[tokio::test]
async fn fails_for_missing_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;
    let dish = factory::create_dish(db).await?;

    let err = DiscountRepository::new(db)
        .update(UpdateDiscountParam {
            order_id: order.id,
            dish_id: dish.id,
            discount: 3.0,
        })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!(
            "DiscountDetail with id ({}, {}) not found",
            order.id, dish.id
        )
    );

    Ok(())
}

/// Tests an update whose row disappeared between the lookup and the write.
///
/// Expected: RecordNotFound naming the pair
#[test]
fn maps_lost_update_to_not_found() {
    let err = map_update_err(sea_orm::DbErr::RecordNotUpdated, 4, 7);

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "DiscountDetail with id (4, 7) not found");
}

/// Tests that unrelated store failures keep their database error.
///
/// Expected: AppError::DbErr
#[test]
fn keeps_other_update_errors() {
    let err = map_update_err(sea_orm::DbErr::Custom("disk full".to_string()), 4, 7);

    assert!(matches!(err, AppError::DbErr(_)));
}
