use super::*;

/// Seeds Kyiv → Warsaw, Lviv → Warsaw and Warsaw → Kyiv; returns their IDs in that order.
async fn seed_routes(db: &sea_orm::DatabaseConnection) -> Result<[i32; 3], AppError> {
    let kyiv = factory::helpers::create_airport_in(db, "Ukraine", "Kyiv", "Boryspil").await?;
    let lviv =
        factory::helpers::create_airport_in(db, "Ukraine", "Lviv", "Danylo Halytskyi").await?;
    let warsaw = factory::helpers::create_airport_in(db, "Poland", "Warsaw", "Chopin").await?;

    let a = factory::route::create_route(db, kyiv.id, warsaw.id).await?;
    let b = factory::route::create_route(db, lviv.id, warsaw.id).await?;
    let c = factory::route::create_route(db, warsaw.id, kyiv.id).await?;

    Ok([a.id, b.id, c.id])
}

fn ids(routes: &[crate::server::model::route::Route]) -> Vec<i32> {
    routes.iter().map(|r| r.id).collect()
}

/// Tests `source=Kyiv` only matches routes leaving Kyiv and `zzz` matches nothing.
///
/// Expected: Ok(vec![kyiv_warsaw]) then Ok(empty)
#[tokio::test]
async fn filters_by_source_city() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let [kyiv_warsaw, _, _] = seed_routes(db).await?;
    let service = RouteService::new(db);

    let routes = service
        .list(RouteFilter {
            source: TextFilter::new(Some("Kyiv")),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&routes), vec![kyiv_warsaw]);

    let routes = service
        .list(RouteFilter {
            source: TextFilter::new(Some("zzz")),
            ..Default::default()
        })
        .await?;
    assert!(routes.is_empty());

    Ok(())
}

/// Tests matching on airport name, case-insensitively, combined with a destination.
///
/// Expected: Ok(vec![lviv_warsaw])
#[tokio::test]
async fn matches_airport_name_and_combines_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let [_, lviv_warsaw, _] = seed_routes(db).await?;

    let routes = RouteService::new(db)
        .list(RouteFilter {
            source: TextFilter::new(Some("HALYTSKYI")),
            destination: TextFilter::new(Some("chopin")),
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&routes), vec![lviv_warsaw]);

    Ok(())
}

/// Tests the country filters.
///
/// Expected: both Ukrainian departures for `source_country=ukr`
#[tokio::test]
async fn filters_by_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let [kyiv_warsaw, lviv_warsaw, warsaw_kyiv] = seed_routes(db).await?;
    let service = RouteService::new(db);

    let routes = service
        .list(RouteFilter {
            source_country: TextFilter::new(Some("ukr")),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&routes), vec![kyiv_warsaw, lviv_warsaw]);

    let routes = service
        .list(RouteFilter {
            destination_country: TextFilter::new(Some("Ukraine")),
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&routes), vec![warsaw_kyiv]);

    Ok(())
}

/// Tests no filters lists every route.
///
/// Expected: Ok(all three routes)
#[tokio::test]
async fn no_filter_lists_everything() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = seed_routes(db).await?;

    let routes = RouteService::new(db).list(RouteFilter::default()).await?;

    assert_eq!(ids(&routes), seeded.to_vec());

    Ok(())
}

/// Tests a `Lviv-Warsaw` city pair matches only that direction, and not airport names.
///
/// Expected: Ok(vec![lviv_warsaw]), then Ok(empty) for `Chopin-Kyiv`
#[tokio::test]
async fn filters_by_city_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let [_, lviv_warsaw, _] = seed_routes(db).await?;
    let service = RouteService::new(db);

    let (source_city, destination_city) = city_pair(Some("lviv-WARSAW"));
    let routes = service
        .list(RouteFilter {
            source_city,
            destination_city,
            ..Default::default()
        })
        .await?;
    assert_eq!(ids(&routes), vec![lviv_warsaw]);

    let (source_city, destination_city) = city_pair(Some("Chopin-Kyiv"));
    let routes = service
        .list(RouteFilter {
            source_city,
            destination_city,
            ..Default::default()
        })
        .await?;
    assert!(routes.is_empty());

    Ok(())
}
