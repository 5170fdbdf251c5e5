use super::*;

/// Tests a delayed flight stores its actual arrival, and detail and listing expose it.
///
/// Expected: Ok(Flight) with Delayed and the arrival time; list item matches
#[tokio::test]
async fn delays_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let actual = Utc.with_ymd_and_hms(2030, 1, 10, 14, 30, 0).unwrap();
    let service = FlightService::new(db);

    let flight = service
        .update_status(
            deps.flight.id,
            UpdateFlightStatusParams::new(FlightStatus::Delayed, Some(actual), None)?,
        )
        .await?;

    assert_eq!(flight.status, FlightStatus::Delayed);
    assert_eq!(flight.actual_arrival_time, Some(actual));
    assert_eq!(flight.emergent_destination_id, None);
    assert_eq!(service.get(deps.flight.id).await?.status, FlightStatus::Delayed);

    let page = service.list(FlightFilter::default(), 0, 10).await?;
    assert_eq!(page.flights[0].status, FlightStatus::Delayed);
    assert_eq!(page.flights[0].actual_arrival_time, Some(actual));

    Ok(())
}

/// Tests an emergency diverts to an existing airport and a later normal status clears it.
///
/// Expected: Emergency with the destination set, then Normal with both fields cleared
#[tokio::test]
async fn emergency_then_back_to_normal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let alternate = factory::airport::create_airport(db).await?;
    let service = FlightService::new(db);

    let flight = service
        .update_status(
            deps.flight.id,
            UpdateFlightStatusParams::new(FlightStatus::Emergency, None, Some(alternate.id))?,
        )
        .await?;
    assert_eq!(flight.status, FlightStatus::Emergency);
    assert_eq!(flight.emergent_destination_id, Some(alternate.id));

    let flight = service
        .update_status(
            deps.flight.id,
            UpdateFlightStatusParams::new(FlightStatus::Normal, None, Some(alternate.id))?,
        )
        .await?;
    assert_eq!(flight.status, FlightStatus::Normal);
    assert_eq!(flight.emergent_destination_id, None);
    assert_eq!(flight.actual_arrival_time, None);

    Ok(())
}

/// Tests unknown flights and unknown emergent destinations, and that a failed update
/// leaves the flight untouched.
///
/// Expected: Err(AppError::NotFound) for both; the flight stays Normal
#[tokio::test]
async fn unknown_flight_or_destination_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let service = FlightService::new(db);

    let result = service
        .update_status(
            4242,
            UpdateFlightStatusParams::new(FlightStatus::Canceled, None, None)?,
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .update_status(
            deps.flight.id,
            UpdateFlightStatusParams::new(FlightStatus::Emergency, None, Some(4242))?,
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    assert_eq!(service.get(deps.flight.id).await?.status, FlightStatus::Normal);

    Ok(())
}
