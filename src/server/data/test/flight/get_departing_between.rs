use super::*;

/// Tests flights come back in departure order regardless of insertion order.
///
/// Expected: Ok(Vec) ordered earliest departure first
#[tokio::test]
async fn orders_by_departure_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let early = factory::flight::FlightFactory::new(db, deps.route.id, deps.airplane.id)
        .departure_time(deps.flight.departure_time - Duration::hours(1))
        .build()
        .await?;

    let flights = FlightRepository::new(db).get_departing_between(None).await?;

    let ids: Vec<i32> = flights.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![early.id, deps.flight.id]);

    Ok(())
}

/// Tests the range is half-open: the start is included and the end is not.
///
/// Expected: Ok(Vec) with only the flight departing at the range start
#[tokio::test]
async fn includes_start_and_excludes_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let start = Utc.with_ymd_and_hms(2030, 5, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(1);

    let at_start = factory::flight::FlightFactory::new(db, deps.route.id, deps.airplane.id)
        .departure_time(start)
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, deps.route.id, deps.airplane.id)
        .departure_time(end)
        .build()
        .await?;

    let flights = FlightRepository::new(db)
        .get_departing_between(Some((start, end)))
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, at_start.id);

    Ok(())
}
