use super::*;

/// Tests list items carry seat availability.
///
/// Expected: Ok(PaginatedFlights) with 11 of 12 seats available
#[tokio::test]
async fn reports_tickets_available() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::order::create_ticket(db, order.id, deps.flight.id, 1, 1).await?;

    let page = FlightService::new(db)
        .list(FlightFilter::default(), 0, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.flights[0].id, deps.flight.id);
    assert_eq!(page.flights[0].tickets_available, 11);

    Ok(())
}

/// Tests source and destination filters match city names case-insensitively.
///
/// Expected: only the Kyiv to Warsaw flight for `source=kyiv`, nothing for `zzz`
#[tokio::test]
async fn filters_by_endpoint_text() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kyiv = factory::helpers::create_airport_in(db, "Ukraine", "Kyiv", "Boryspil").await?;
    let warsaw = factory::helpers::create_airport_in(db, "Poland", "Warsaw", "Chopin").await?;
    let airplane = factory::helpers::create_airplane_with_grid(db, 3, 4).await?;

    let outbound = factory::route::create_route(db, kyiv.id, warsaw.id).await?;
    let inbound = factory::route::create_route(db, warsaw.id, kyiv.id).await?;
    let expected = factory::flight::create_flight(db, outbound.id, airplane.id).await?;
    factory::flight::create_flight(db, inbound.id, airplane.id).await?;

    let service = FlightService::new(db);

    let page = service
        .list(
            FlightFilter {
                source: TextFilter::new(Some("kyiv")),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.flights[0].id, expected.id);

    let page = service
        .list(
            FlightFilter {
                source: TextFilter::new(Some("zzz")),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert!(page.flights.is_empty());
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests the departure date is a calendar day in the configured offset.
///
/// A flight departing 22:30 UTC on May 1 is on May 2 at UTC+03:00.
///
/// Expected: matched by May 1 in UTC and by May 2 at +03:00, not the other way round
#[tokio::test]
async fn filters_by_departure_date_in_offset() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let late = factory::flight::FlightFactory::new(db, deps.route.id, deps.airplane.id)
        .departure_time(Utc.with_ymd_and_hms(2030, 5, 1, 22, 30, 0).unwrap())
        .build()
        .await?;

    let may_1 = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
    let may_2 = NaiveDate::from_ymd_opt(2030, 5, 2).unwrap();
    let kyiv_time = FixedOffset::east_opt(3 * 3600).unwrap();
    let service = FlightService::new(db);

    let cases = [
        (may_1, FixedOffset::east_opt(0).unwrap(), true),
        (may_2, FixedOffset::east_opt(0).unwrap(), false),
        (may_1, kyiv_time, false),
        (may_2, kyiv_time, true),
    ];

    for (date, offset, expected) in cases {
        let page = service
            .list(
                FlightFilter {
                    departure_date: Some(date),
                    date_offset: offset,
                    ..Default::default()
                },
                0,
                10,
            )
            .await?;

        let ids: Vec<i32> = page.flights.iter().map(|f| f.id).collect();
        assert_eq!(ids == vec![late.id], expected, "{} at {}", date, offset);
    }

    Ok(())
}

/// Tests pagination slices the ordered result and reports totals.
///
/// Expected: 5 flights split 2/2/1 across three pages
#[tokio::test]
async fn paginates_in_departure_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_flight_with_dependencies(db).await?;
    let base = deps.flight.departure_time;

    let mut expected = vec![deps.flight.id];
    for hours in 1..=4 {
        let flight = factory::flight::FlightFactory::new(db, deps.route.id, deps.airplane.id)
            .departure_time(base + Duration::hours(hours))
            .build()
            .await?;
        expected.push(flight.id);
    }

    let service = FlightService::new(db);

    let mut seen = Vec::new();
    for page_number in 0..3 {
        let page = service
            .list(FlightFilter::default(), page_number, 2)
            .await?;
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        seen.extend(page.flights.iter().map(|f| f.id));
    }

    assert_eq!(seen, expected);

    Ok(())
}

/// Tests a page whose row offset overflows is rejected instead of panicking.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_overflowing_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_flight_with_dependencies(db).await?;

    let result = FlightService::new(db)
        .list(FlightFilter::default(), u64::MAX, 10)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
