use super::*;

/// Tests listing dishes.
///
/// Expected: Ok with every dish in ID order
#[tokio::test]
async fn lists_dishes_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ordering_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_dish(db).await?;
    let second = factory::create_dish(db).await?;

    let dishes = DishRepository::new(db).list().await?;

    let ids: Vec<i32> = dishes.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
