use super::*;

/// Tests country names are unique.
///
/// Expected: second create Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_country() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = InventoryService::new(db);
    let params = CreateCountryParams {
        name: "Ukraine".to_string(),
    };

    service.create_country(params.clone()).await?;
    let result = service.create_country(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a duplicate that slips past the existence check is still a 400.
///
/// Both inserts go straight to the repository, as two racing creates would.
///
/// Expected: unique index violation mapped to Err(AppError::BadRequest)
#[tokio::test]
async fn duplicate_country_insert_maps_to_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CountryRepository::new(db);
    let params = CreateCountryParams {
        name: "Ukraine".to_string(),
    };

    repo.create(params.clone()).await?;
    let err = repo.create(params).await.unwrap_err();
    let mapped = unique_violation(err, || "Country 'Ukraine' already exists".to_string());

    assert!(
        matches!(&mapped, AppError::BadRequest(msg) if msg == "Country 'Ukraine' already exists")
    );

    Ok(())
}

/// Tests a duplicate airport IATA code inserted past the existence check is a 400.
///
/// Expected: unique index violation mapped to Err(AppError::BadRequest)
#[tokio::test]
async fn duplicate_airport_code_insert_maps_to_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::location::find_or_create_country(db, "Ukraine").await?;
    let city = factory::location::create_city(db, country.id).await?;
    let repo = AirportRepository::new(db);
    let params = CreateAirportParams {
        name: "Boryspil".to_string(),
        closest_big_city_id: city.id,
        iata_code: Some("KBP".to_string()),
        timezone: "UTC".to_string(),
    };

    repo.create(params.clone()).await?;
    let err = repo.create(params).await.unwrap_err();

    assert!(matches!(
        unique_violation(err, || "taken".to_string()),
        AppError::BadRequest(_)
    ));

    Ok(())
}

/// Tests a city needs an existing country.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn city_in_unknown_country_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InventoryService::new(db)
        .create_city(CreateCityParams {
            name: "Odesa".to_string(),
            country_id: 4242,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests airport creation resolves its city and country names.
///
/// Expected: Ok(Airport) listed by `list_airports`
#[tokio::test]
async fn creates_and_lists_airport() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::location::find_or_create_country(db, "Ukraine").await?;
    let city = factory::location::CityFactory::new(db, country.id)
        .name("Kyiv")
        .build()
        .await?;
    let service = InventoryService::new(db);

    let airport = service
        .create_airport(CreateAirportParams {
            name: "Boryspil".to_string(),
            closest_big_city_id: city.id,
            iata_code: Some("KBP".to_string()),
            timezone: "UTC".to_string(),
        })
        .await?;

    assert_eq!(airport.city_name, "Kyiv");
    assert_eq!(airport.country_name, "Ukraine");
    assert_eq!(service.list_airports().await?, vec![airport]);

    Ok(())
}

/// Tests IATA codes are unique and at most three characters.
///
/// Expected: Err(AppError::BadRequest) for a reused code and for a four-letter code
#[tokio::test]
async fn rejects_bad_iata_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::location::create_country(db).await?;
    let city = factory::location::create_city(db, country.id).await?;
    factory::airport::AirportFactory::new(db, city.id)
        .iata_code("LWO")
        .build()
        .await?;
    let service = InventoryService::new(db);

    for code in ["LWO", "LWOX"] {
        let result = service
            .create_airport(CreateAirportParams {
                name: "Lviv".to_string(),
                closest_big_city_id: city.id,
                iata_code: Some(code.to_string()),
                timezone: "UTC".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))), "{}", code);
    }

    Ok(())
}

/// Tests an airport near an unknown city.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn airport_near_unknown_city_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InventoryService::new(db)
        .create_airport(CreateAirportParams {
            name: "Nowhere".to_string(),
            closest_big_city_id: 4242,
            iata_code: None,
            timezone: "UTC".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the airport time zone is validated, defaulted and stored.
///
/// Expected: unknown zone gives Err(CatalogError::InvalidTimezone); a blank zone is
/// stored as UTC and a named zone round-trips
#[tokio::test]
async fn validates_and_stores_airport_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::location::create_country(db).await?;
    let city = factory::location::create_city(db, country.id).await?;

    let dto = |name: &str, timezone: Option<&str>| CreateAirportDto {
        name: name.to_string(),
        closest_big_city_id: city.id,
        iata_code: None,
        timezone: timezone.map(str::to_string),
    };

    assert!(matches!(
        CreateAirportParams::from_dto(dto("Atlantis", Some("Mars/Olympus"))),
        Err(CatalogError::InvalidTimezone(_))
    ));

    let service = InventoryService::new(db);

    let defaulted = service
        .create_airport(CreateAirportParams::from_dto(dto("Zhuliany", Some(" ")))?)
        .await?;
    assert_eq!(defaulted.timezone, "UTC");

    let kyiv = service
        .create_airport(CreateAirportParams::from_dto(dto(
            "Boryspil",
            Some("Europe/Kyiv"),
        ))?)
        .await?;
    assert_eq!(kyiv.timezone, "Europe/Kyiv");
    assert!(service.list_airports().await?.contains(&kyiv));

    Ok(())
}
