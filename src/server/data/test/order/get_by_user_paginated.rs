use super::*;

/// Tests pages hold the newest orders first and the total counts only the user's orders.
///
/// Expected: Ok((page, 3)) with the two most recent orders on page 0
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::order::create_order(db, user.id).await?.id);
    }
    factory::order::create_order(db, other.id).await?;

    let repo = OrderRepository::new(db);

    let (first_page, total) = repo.get_by_user_paginated(user.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );

    let (second_page, _) = repo.get_by_user_paginated(user.id, 1, 2).await?;
    assert_eq!(
        second_page.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![ids[0]]
    );

    Ok(())
}
