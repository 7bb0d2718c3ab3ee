use super::*;

/// Tests a partial dish update.
///
/// Expected: Ok with new name and unchanged price
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::dish::DishFactory::new(db)
        .name("Soup")
        .price(6.5)
        .build()
        .await?;

    let updated = DishRepository::new(db)
        .update(UpdateDishParam {
            id: dish.id,
            name: Some("Tomato soup".to_string()),
            price: None,
        })
        .await?;

    assert_eq!(updated.name, "Tomato soup");
    assert_eq!(updated.price, 6.5);

    Ok(())
}

/// Tests updating a dish that does not exist.
///
/// Expected: Err(RecordNotFound) naming the dish and its ID
#[tokio::test]
async fn fails_for_missing_dish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = DishRepository::new(db)
        .update(UpdateDishParam {
            id: 31,
            name: None,
            price: Some(3.0),
        })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Dish with id 31 not found");

    Ok(())
}
