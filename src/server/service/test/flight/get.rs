use super::*;

/// Tests flight detail lists taken places and derives availability.
///
/// Expected: Ok(Flight) with 2 taken places and 10 tickets available
#[tokio::test]
async fn reports_taken_places() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::order::create_ticket(db, order.id, deps.flight.id, 2, 1).await?;
    factory::order::create_ticket(db, order.id, deps.flight.id, 1, 3).await?;

    let flight = FlightService::new(db).get(deps.flight.id).await?;

    assert_eq!(flight.taken_places.len(), 2);
    assert_eq!(
        (flight.taken_places[0].row, flight.taken_places[0].seat),
        (1, 3)
    );
    assert_eq!(flight.tickets_available(), 10);

    Ok(())
}

/// Tests an unknown flight.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_flight_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightService::new(db).get(4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
