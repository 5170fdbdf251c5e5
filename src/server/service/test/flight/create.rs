use super::*;

/// Tests a flight is created with its crew assigned.
///
/// Expected: Ok(Flight) with route, airplane and both crew members resolved
#[tokio::test]
async fn creates_flight_with_crew() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let pilot = factory::crew::create_crew(db).await?;
    let purser = factory::crew::create_crew(db).await?;

    let departure = Utc.with_ymd_and_hms(2030, 1, 10, 8, 0, 0).unwrap();
    let params = CreateFlightParams::new(
        deps.route.id,
        deps.airplane.id,
        departure,
        departure + Duration::hours(2),
        vec![purser.id, pilot.id, pilot.id],
    )?;

    let flight = FlightService::new(db).create(params).await?;

    assert_eq!(flight.route.id, deps.route.id);
    assert_eq!(flight.airplane.id, deps.airplane.id);
    assert_eq!(flight.departure_time, departure);
    assert_eq!(flight.crew.len(), 2);
    assert!(flight.taken_places.is_empty());
    assert_eq!(flight.tickets_available(), 12);

    Ok(())
}

/// Tests arrival equal to departure is an invalid schedule.
///
/// Expected: Err(AppError::CatalogErr(CatalogError::InvalidSchedule))
#[tokio::test]
async fn rejects_arrival_equal_to_departure() -> Result<(), AppError> {
    let result = CreateFlightParams::from_dto(CreateFlightDto {
        route_id: 1,
        airplane_id: 1,
        departure_time: "2030-01-10 08:00".to_string(),
        arrival_time: "2030-01-10 08:00".to_string(),
        crew: Vec::new(),
    });

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::InvalidSchedule { .. }))
    ));

    Ok(())
}

/// Tests a malformed timestamp is a bad request.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_malformed_timestamp() -> Result<(), AppError> {
    let result = CreateFlightParams::from_dto(CreateFlightDto {
        route_id: 1,
        airplane_id: 1,
        departure_time: "10/01/2030 8am".to_string(),
        arrival_time: "2030-01-10 10:00".to_string(),
        crew: Vec::new(),
    });

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an unknown crew member aborts creation and leaves no flight behind.
///
/// Expected: Err(AppError::NotFound), flight count unchanged
#[tokio::test]
async fn unknown_crew_is_not_found() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let departure = Utc.with_ymd_and_hms(2030, 1, 10, 8, 0, 0).unwrap();
    let params = CreateFlightParams::new(
        deps.route.id,
        deps.airplane.id,
        departure,
        departure + Duration::hours(1),
        vec![4242],
    )?;

    let result = FlightService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Flight::find().count(db).await?, 1);

    Ok(())
}

/// Tests unknown route and airplane references.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn unknown_route_or_airplane_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let departure = Utc.with_ymd_and_hms(2030, 1, 10, 8, 0, 0).unwrap();
    let arrival = departure + Duration::hours(1);
    let service = FlightService::new(db);

    let result = service
        .create(CreateFlightParams::new(4242, deps.airplane.id, departure, arrival, Vec::new())?)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .create(CreateFlightParams::new(deps.route.id, 4242, departure, arrival, Vec::new())?)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
