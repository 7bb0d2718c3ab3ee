use super::*;

/// Tests creating a new dish.
///
/// Verifies that the repository persists the name and price and that the dish
/// can be re-fetched with identical fields.
///
/// Expected: Ok with dish created
#[tokio::test]
async fn creates_dish_and_round_trips() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DishRepository::new(db);
    let created = repo
        .create(CreateDishParam {
            name: "Ramen".to_string(),
            price: 11.25,
        })
        .await?;

    let fetched = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Ramen");
    assert_eq!(fetched.price, 11.25);

    Ok(())
}
