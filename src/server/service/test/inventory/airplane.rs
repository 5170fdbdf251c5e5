use super::*;

/// Tests a non-positive seat grid is rejected when the params are built.
///
/// Expected: Err(CatalogError::InvalidSeatGrid)
#[tokio::test]
async fn rejects_empty_seat_grid() -> Result<(), AppError> {
    let result = CreateAirplaneParams::from_dto(CreateAirplaneDto {
        name: "Ghost".to_string(),
        rows: 0,
        seats_per_row: 6,
        airplane_type_id: 1,
        airline_id: None,
    });

    assert_eq!(
        result.unwrap_err(),
        CatalogError::InvalidSeatGrid {
            rows: 0,
            seats_per_row: 6
        }
    );

    Ok(())
}

/// Tests a seat grid whose seat count does not fit in an `i32` is rejected.
///
/// Expected: Err(CatalogError::InvalidSeatGrid)
#[tokio::test]
async fn rejects_overflowing_seat_grid() -> Result<(), AppError> {
    let result = CreateAirplaneParams::from_dto(CreateAirplaneDto {
        name: "Colossus".to_string(),
        rows: 50_000,
        seats_per_row: 50_000,
        airplane_type_id: 1,
        airline_id: None,
    });

    assert_eq!(
        result.unwrap_err(),
        CatalogError::InvalidSeatGrid {
            rows: 50_000,
            seats_per_row: 50_000
        }
    );

    Ok(())
}

/// Tests an airplane is created with its derived capacity.
///
/// Expected: Ok(Airplane) with capacity 180 and the type name resolved
#[tokio::test]
async fn creates_airplane() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane_type = factory::airplane::create_airplane_type(db).await?;
    let airline = factory::airline::create_airline(db).await?;

    let airplane = InventoryService::new(db)
        .create_airplane(CreateAirplaneParams {
            name: "UR-PSA".to_string(),
            grid: SeatGrid::new(30, 6)?,
            airplane_type_id: airplane_type.id,
            airline_id: Some(airline.id),
        })
        .await?;

    assert_eq!(airplane.capacity(), 180);
    assert_eq!(airplane.airplane_type_name, airplane_type.name);
    assert_eq!(airplane.airline_id, Some(airline.id));

    Ok(())
}

/// Tests unknown airplane type and airline references.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn unknown_type_or_airline_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_inventory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane_type = factory::airplane::create_airplane_type(db).await?;
    let service = InventoryService::new(db);

    for (type_id, airline_id) in [(4242, None), (airplane_type.id, Some(4242))] {
        let result = service
            .create_airplane(CreateAirplaneParams {
                name: "UR-PSB".to_string(),
                grid: SeatGrid::new(10, 4)?,
                airplane_type_id: type_id,
                airline_id,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    Ok(())
}
