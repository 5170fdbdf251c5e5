use super::*;

/// Tests a rating is stored with the airline name and feeds the airline's averages.
///
/// Expected: Ok(AirlineRating), then the airline reports crew 4.0 and overall 4.0
#[tokio::test]
async fn creates_rating_and_updates_summary() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::airline::create_airline_named(db, "SkyUp").await?;

    let rating = RatingService::new(db)
        .create(CreateAirlineRatingParams {
            airline_id: airline.id,
            scores: RatingScores {
                crew: Some(4),
                ..Default::default()
            },
        })
        .await?;

    assert_eq!(rating.airline_name, "SkyUp");
    assert_eq!(rating.scores.crew, Some(4));
    assert_eq!(rating.scores.wi_fi, None);

    let airline = InventoryService::new(db).get_airline(airline.id).await?;
    assert_eq!(airline.rating.crew, Some(4.0));
    assert_eq!(airline.rating.services, None);
    assert_eq!(airline.rating.overall, 4.0);

    Ok(())
}

/// Tests rating an unknown airline.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_airline_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RatingService::new(db)
        .create(CreateAirlineRatingParams {
            airline_id: 4242,
            scores: RatingScores::default(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a score outside 1..=5 is rejected before anything is stored.
///
/// Expected: Err(CatalogError::InvalidScore) naming the category
#[tokio::test]
async fn rejects_out_of_range_score() -> Result<(), AppError> {
    let result = CreateAirlineRatingParams::from_dto(CreateAirlineRatingDto {
        airline_id: 1,
        boarding_deplaining: None,
        crew: None,
        services: None,
        entertainment: Some(7),
        wi_fi: None,
    });

    assert!(matches!(
        result,
        Err(CatalogError::InvalidScore {
            category: "Entertainment",
            score: 7
        })
    ));

    Ok(())
}
