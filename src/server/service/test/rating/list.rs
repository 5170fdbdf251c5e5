use super::*;

/// Tests ratings are listed newest first for airlines matching the name, case-insensitively.
///
/// Expected: Ok with the two SkyUp ratings, newest first, and nothing from Wizz
#[tokio::test]
async fn lists_matching_airlines_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let skyup = factory::airline::create_airline_named(db, "SkyUp Airlines").await?;
    let wizz = factory::airline::create_airline_named(db, "Wizz Air").await?;
    let now = Utc::now();

    let older = factory::RatingFactory::new(db, skyup.id)
        .crew(3)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::RatingFactory::new(db, skyup.id)
        .crew(5)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::RatingFactory::new(db, wizz.id)
        .crew(1)
        .created_at(now)
        .build()
        .await?;

    let page = RatingService::new(db).list(Some("skyup"), 0, 10).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    let ids: Vec<i32> = page.ratings.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(page
        .ratings
        .iter()
        .all(|r| r.airline_name == "SkyUp Airlines"));

    Ok(())
}

/// Tests pagination over matching ratings and a name that matches no airline.
///
/// Expected: page 1 of size 2 holds the last rating; an unknown name gives an empty page
#[tokio::test]
async fn paginates_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::airline::create_airline_named(db, "Windrose").await?;
    let now = Utc::now();
    for days in 0..3 {
        factory::RatingFactory::new(db, airline.id)
            .services(4)
            .created_at(now - Duration::days(days))
            .build()
            .await?;
    }
    let service = RatingService::new(db);

    let page = service.list(Some("windrose"), 1, 2).await?;
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.ratings.len(), 1);

    let empty = service.list(Some("nobody"), 0, 10).await?;
    assert_eq!(empty.total, 0);
    assert!(empty.ratings.is_empty());

    Ok(())
}

/// Tests listing without an airline name or with an overflowing page.
///
/// Expected: Err(AppError::BadRequest) for a missing, blank and overflowing request
#[tokio::test]
async fn rejects_missing_name_and_overflowing_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = RatingService::new(db);

    assert!(matches!(
        service.list(None, 0, 10).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.list(Some("  "), 0, 10).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.list(Some("air"), u64::MAX, 10).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
