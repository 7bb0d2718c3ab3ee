use super::*;

/// Tests finding a dish that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = DishRepository::new(db).find_by_id(12).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests finding a dish created through the factory.
///
/// Expected: Ok(Some(Dish))
#[tokio::test]
async fn finds_existing_dish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::create_dish(db).await?;

    let found = DishRepository::new(db).find_by_id(dish.id).await?.unwrap();

    assert_eq!(found.name, dish.name);
    assert_eq!(found.price, dish.price);

    Ok(())
}
