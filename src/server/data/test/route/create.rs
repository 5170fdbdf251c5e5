use super::*;

/// Tests a created route is readable with both endpoints resolved.
///
/// Expected: Ok(Some(Route)) with airport, city and country names
#[tokio::test]
async fn resolves_endpoints_after_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source =
        factory::helpers::create_airport_in(db, "Ukraine", "Kyiv", "Boryspil").await?;
    let destination =
        factory::helpers::create_airport_in(db, "Poland", "Warsaw", "Chopin").await?;

    let repo = RouteRepository::new(db);
    let id = repo
        .create(CreateRouteParams {
            source_id: source.id,
            destination_id: destination.id,
            distance: 690,
        })
        .await?;

    let route = repo.find_by_id(id).await?.unwrap();

    assert_eq!(route.distance, 690);
    assert_eq!(route.source.airport_name, "Boryspil");
    assert_eq!(route.source.city_name, "Kyiv");
    assert_eq!(route.source.country_name, "Ukraine");
    assert_eq!(route.destination.airport_name, "Chopin");
    assert_eq!(route.destination.city_name, "Warsaw");
    assert_eq!(route.destination.country_name, "Poland");
    assert!(repo.exists(id).await?);

    Ok(())
}

/// Tests lookups of an unknown route.
///
/// Expected: Ok(None) and exists == false
#[tokio::test]
async fn unknown_route_is_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);

    assert!(repo.find_by_id(4242).await?.is_none());
    assert!(!repo.exists(4242).await?);

    Ok(())
}
