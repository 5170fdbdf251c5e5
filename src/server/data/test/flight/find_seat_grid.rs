use super::*;

/// Tests the seat grid comes from the flight's airplane.
///
/// Expected: Ok(Some(SeatGrid)) with 3 rows of 4 seats
#[tokio::test]
async fn returns_grid_of_assigned_airplane() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;

    let grid = FlightRepository::new(db)
        .find_seat_grid(deps.flight.id)
        .await?
        .unwrap();

    assert_eq!(grid.rows, 3);
    assert_eq!(grid.seats_per_row, 4);
    assert_eq!(grid.capacity(), 12);

    Ok(())
}

/// Tests an unknown flight has no grid.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grid = FlightRepository::new(db).find_seat_grid(4242).await?;

    assert!(grid.is_none());

    Ok(())
}
