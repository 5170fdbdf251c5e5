use super::*;

/// Tests the unique seat index rejects a second ticket for the same seat.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let request = TicketRequest {
        flight_id: deps.flight.id,
        row: 1,
        seat: 1,
    };
    let repo = TicketRepository::new(db);

    repo.create(order.id, request).await?;
    let result = repo.create(order.id, request).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the same row and seat on different flights are independent.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_seat_on_other_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::helpers::create_flight_with_dependencies(db).await?;
    let second = factory::helpers::create_flight_with_airplane(db, &first.airplane).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let repo = TicketRepository::new(db);
    for flight_id in [first.flight.id, second.flight.id] {
        repo.create(
            order.id,
            TicketRequest {
                flight_id,
                row: 2,
                seat: 3,
            },
        )
        .await?;
    }

    assert!(repo.is_taken(first.flight.id, 2, 3).await?);
    assert!(repo.is_taken(second.flight.id, 2, 3).await?);
    assert!(!repo.is_taken(first.flight.id, 3, 2).await?);

    Ok(())
}
