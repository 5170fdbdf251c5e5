use super::*;

/// Tests routes are listed in ID order.
///
/// Expected: Ok(Vec<Route>) ordered by ascending ID
#[tokio::test]
async fn lists_routes_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::airport::create_airport(db).await?;
    let b = factory::airport::create_airport(db).await?;

    let first = factory::route::create_route(db, a.id, b.id).await?;
    let second = factory::route::create_route(db, b.id, a.id).await?;

    let routes = RouteRepository::new(db).get_all().await?;

    let ids: Vec<i32> = routes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(routes[1].source.airport_id, b.id);
    assert_eq!(routes[1].destination.airport_id, a.id);

    Ok(())
}

/// Tests batch lookup skips unknown IDs.
///
/// Expected: Ok(HashMap) containing only the existing route
#[tokio::test]
async fn get_by_ids_skips_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::airport::create_airport(db).await?;
    let b = factory::airport::create_airport(db).await?;
    let route = factory::route::create_route(db, a.id, b.id).await?;

    let routes = RouteRepository::new(db)
        .get_by_ids(vec![route.id, 4242])
        .await?;

    assert_eq!(routes.len(), 1);
    assert!(routes.contains_key(&route.id));

    Ok(())
}
