use super::*;

/// Tests the owner can load their order.
///
/// Expected: Ok(Some(order))
#[tokio::test]
async fn finds_own_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let found = OrderRepository::new(db)
        .find_for_user(order.id, user.id)
        .await?;

    assert_eq!(found.map(|o| o.id), Some(order.id));

    Ok(())
}

/// Tests another user's order is invisible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_other_users_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, owner.id).await?;

    let found = OrderRepository::new(db)
        .find_for_user(order.id, other.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
