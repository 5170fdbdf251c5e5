use super::*;

/// Tests sold tickets are counted per flight and unsold flights are absent.
///
/// Expected: Ok(HashMap) with 2 for the first flight and no entry for the second
#[tokio::test]
async fn counts_tickets_per_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let sold = factory::helpers::create_flight_with_dependencies(db).await?;
    let unsold = factory::helpers::create_flight_with_airplane(db, &sold.airplane).await?;
    let order = factory::order::create_order(db, user.id).await?;

    factory::order::create_ticket(db, order.id, sold.flight.id, 1, 1).await?;
    factory::order::create_ticket(db, order.id, sold.flight.id, 1, 2).await?;

    let counts = TicketRepository::new(db)
        .count_by_flights(vec![sold.flight.id, unsold.flight.id])
        .await?;

    assert_eq!(counts.get(&sold.flight.id), Some(&2));
    assert_eq!(counts.get(&unsold.flight.id), None);

    Ok(())
}

/// Tests an empty id list does not query anything.
///
/// Expected: Ok(empty HashMap)
#[tokio::test]
async fn empty_ids_yield_empty_map() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let counts = TicketRepository::new(db).count_by_flights(Vec::new()).await?;

    assert!(counts.is_empty());

    Ok(())
}
