use super::*;

/// Tests a route between two existing airports.
///
/// Expected: Ok(Route) readable through `get`
#[tokio::test]
async fn creates_route() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source = factory::airport::create_airport(db).await?;
    let destination = factory::airport::create_airport(db).await?;
    let service = RouteService::new(db);

    let route = service
        .create(CreateRouteParams {
            source_id: source.id,
            destination_id: destination.id,
            distance: 540,
        })
        .await?;

    assert_eq!(route.source.airport_id, source.id);
    assert_eq!(route.destination.airport_id, destination.id);
    assert_eq!(service.get(route.id).await?, route);

    Ok(())
}

/// Tests an unknown airport.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_airport_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source = factory::airport::create_airport(db).await?;

    let result = RouteService::new(db)
        .create(CreateRouteParams {
            source_id: source.id,
            destination_id: 4242,
            distance: 100,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an unknown route.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_unknown_route_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RouteService::new(db).get(4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
