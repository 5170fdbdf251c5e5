use super::*;

/// Tests a user's orders are listed newest first with their tickets.
///
/// Expected: Ok(PaginatedOrders) with both orders and correct totals
#[tokio::test]
async fn lists_own_orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let service = BookingService::new(db);

    let first = service
        .place_order(PlaceOrderParams {
            user_id: user.id,
            tickets: vec![ticket(deps.flight.id, 1, 1)],
        })
        .await?;
    let second = service
        .place_order(PlaceOrderParams {
            user_id: user.id,
            tickets: vec![ticket(deps.flight.id, 1, 2), ticket(deps.flight.id, 1, 3)],
        })
        .await?;
    service
        .place_order(PlaceOrderParams {
            user_id: other.id,
            tickets: vec![ticket(deps.flight.id, 2, 1)],
        })
        .await?;

    let page = service.list_orders(user.id, 0, 10).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.orders.len(), 2);
    assert_eq!(page.orders[0].id, second.id);
    assert_eq!(page.orders[0].tickets.len(), 2);
    assert_eq!(page.orders[1].id, first.id);
    assert_eq!(page.orders[1].tickets.len(), 1);

    Ok(())
}

/// Tests an order can be fetched by its owner but not by another user.
///
/// Expected: Ok(Order) for the owner, Err(AppError::NotFound) for the other user
#[tokio::test]
async fn get_order_is_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let service = BookingService::new(db);

    let order = service
        .place_order(PlaceOrderParams {
            user_id: owner.id,
            tickets: vec![ticket(deps.flight.id, 3, 4)],
        })
        .await?;

    let fetched = service.get_order(owner.id, order.id).await?;
    assert_eq!(fetched.id, order.id);
    assert_eq!(fetched.tickets.len(), 1);
    assert_eq!((fetched.tickets[0].row, fetched.tickets[0].seat), (3, 4));

    let result = service.get_order(other.id, order.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a page whose row offset overflows is rejected instead of panicking.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn list_orders_rejects_overflowing_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = BookingService::new(db);

    let result = service.list_orders(user.id, u64::MAX, 10).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let empty = service.list_orders(user.id, 1_000_000, 10).await?;
    assert!(empty.orders.is_empty());
    assert_eq!(empty.total, 0);

    Ok(())
}
