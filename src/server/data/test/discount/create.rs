use super::*;

/// Tests creating a discount for an existing order and dish.
///
/// Expected: Ok with discount created
#[tokio::test]
async fn creates_discount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;
    let dish = factory::create_dish(db).await?;

    let created = DiscountRepository::new(db)
        .create(CreateDiscountParam {
            order_id: order.id,
            dish_id: dish.id,
            discount: 15.0,
        })
        .await?;

    assert_eq!(created.order_id, order.id);
    assert_eq!(created.dish_id, dish.id);
    assert_eq!(created.discount, 15.0);

    Ok(())
}

/// Tests creating a second discount for the same pair.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, dish, _) = factory::helpers::create_discount_with_dependencies(db).await?;

    let result = DiscountRepository::new(db)
        .create(CreateDiscountParam {
            order_id: order.id,
            dish_id: dish.id,
            discount: 5.0,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the store's unique-key violation on a pair that skipped the existence check.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn maps_unique_violation_to_conflict() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, dish, _) = factory::helpers::create_discount_with_dependencies(db).await?;

    let err = entity::discount_detail::ActiveModel {
        order_id: ActiveValue::Set(order.id),
        dish_id: ActiveValue::Set(dish.id),
        discount: ActiveValue::Set(5.0),
    }
    .insert(db)
    .await
    .unwrap_err();

    let mapped = map_insert_err(err, order.id, dish.id);

    assert!(matches!(mapped, AppError::Conflict(_)));

    Ok(())
}

/// Tests creating a discount that references a dish that does not exist.
///
/// Expected: Err(UnprocessableEntity) with no discount row written
#[tokio::test]
async fn rejects_missing_parent() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db).await?;

    let result = DiscountRepository::new(db)
        .create(CreateDiscountParam {
            order_id: order.id,
            dish_id: 999,
            discount: 5.0,
        })
        .await;

    assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    assert_eq!(entity::prelude::DiscountDetail::find().count(db).await?, 0);

    Ok(())
}
