use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        airline::AirlineRepository,
        airplane::{AirplaneRepository, AirplaneTypeRepository},
        airport::AirportRepository,
        crew::CrewRepository,
        location::{CityRepository, CountryRepository},
    },
    error::{unique_violation, AppError},
    model::{
        airplane::{
            Airplane, AirplaneType, CreateAirplaneParams, CreateAirplaneTypeParams,
            PaginatedAirplanes,
        },
        filter::{page_offset, total_pages},
        inventory::{
            Airline, Airport, City, Country, CreateAirlineParams, CreateAirportParams,
            CreateCityParams, CreateCountryParams, CreateCrewParams, Crew,
        },
    },
};

/// Create and list operations for reference data.
pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a country; names are unique.
    pub async fn create_country(&self, params: CreateCountryParams) -> Result<Country, AppError> {
        let repo = CountryRepository::new(self.db);

        require_name(&params.name, "Country")?;

        let duplicate = format!("Country '{}' already exists", params.name);
        if repo.name_exists(&params.name).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        repo.create(params)
            .await
            .map_err(|err| unique_violation(err, || duplicate))
    }

    pub async fn list_countries(&self) -> Result<Vec<Country>, AppError> {
        Ok(CountryRepository::new(self.db).get_all().await?)
    }

    /// Creates a city in an existing country.
    pub async fn create_city(&self, params: CreateCityParams) -> Result<City, AppError> {
        require_name(&params.name, "City")?;

        if CountryRepository::new(self.db)
            .find_by_id(params.country_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Country {} not found",
                params.country_id
            )));
        }

        Ok(CityRepository::new(self.db).create(params).await?)
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, AppError> {
        Ok(CityRepository::new(self.db).get_all().await?)
    }

    /// Creates an airport near an existing city.
    ///
    /// # Returns
    /// - `Ok(Airport)` - Created airport
    /// - `Err(AppError::NotFound)` - City does not exist
    /// - `Err(AppError::BadRequest)` - Blank name or IATA code already used
    pub async fn create_airport(&self, params: CreateAirportParams) -> Result<Airport, AppError> {
        let repo = AirportRepository::new(self.db);

        require_name(&params.name, "Airport")?;

        if let Some(code) = &params.iata_code {
            if code.chars().count() > 3 {
                return Err(AppError::BadRequest(format!(
                    "IATA code '{}' must be at most 3 characters",
                    code
                )));
            }
            if repo.iata_code_exists(code).await? {
                return Err(AppError::BadRequest(airport_code_taken(code)));
            }
        }

        if CityRepository::new(self.db)
            .find_by_id(params.closest_big_city_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "City {} not found",
                params.closest_big_city_id
            )));
        }

        let code = params.iata_code.clone().unwrap_or_default();
        repo.create(params)
            .await
            .map_err(|err| unique_violation(err, || airport_code_taken(&code)))
    }

    pub async fn list_airports(&self) -> Result<Vec<Airport>, AppError> {
        Ok(AirportRepository::new(self.db).get_all().await?)
    }

    /// Creates an airline; IATA codes are unique when present.
    pub async fn create_airline(&self, params: CreateAirlineParams) -> Result<Airline, AppError> {
        let repo = AirlineRepository::new(self.db);

        require_name(&params.name, "Airline")?;

        if let Some(code) = &params.iata_code {
            if repo.iata_code_exists(code).await? {
                return Err(AppError::BadRequest(airline_code_taken(code)));
            }
        }

        let code = params.iata_code.clone().unwrap_or_default();
        repo.create(params)
            .await
            .map_err(|err| unique_violation(err, || airline_code_taken(&code)))
    }

    pub async fn list_airlines(&self) -> Result<Vec<Airline>, AppError> {
        Ok(AirlineRepository::new(self.db).get_all().await?)
    }

    /// Gets an airline with its fleet size and rating summary.
    ///
    /// # Returns
    /// - `Ok(Airline)` - The airline
    /// - `Err(AppError::NotFound)` - No airline with that ID
    pub async fn get_airline(&self, airline_id: i32) -> Result<Airline, AppError> {
        AirlineRepository::new(self.db)
            .find_by_id(airline_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airline {} not found", airline_id)))
    }

    /// Lists one page of an airline's fleet ordered by airplane name.
    ///
    /// # Returns
    /// - `Ok(PaginatedAirplanes)` - The requested page, possibly empty
    /// - `Err(AppError::NotFound)` - No airline with that ID
    /// - `Err(AppError::BadRequest)` - `page × per_page` is out of range
    pub async fn list_airline_airplanes(
        &self,
        airline_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAirplanes, AppError> {
        page_offset(page, per_page)?;
        self.get_airline(airline_id).await?;

        let (airplanes, total) = AirplaneRepository::new(self.db)
            .get_by_airline_paginated(airline_id, page, per_page)
            .await?;

        Ok(PaginatedAirplanes {
            airplanes,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn create_airplane_type(
        &self,
        params: CreateAirplaneTypeParams,
    ) -> Result<AirplaneType, AppError> {
        require_name(&params.name, "Airplane type")?;

        Ok(AirplaneTypeRepository::new(self.db).create(params).await?)
    }

    pub async fn list_airplane_types(&self) -> Result<Vec<AirplaneType>, AppError> {
        Ok(AirplaneTypeRepository::new(self.db).get_all().await?)
    }

    /// Creates an airplane of an existing type, optionally operated by an existing airline.
    ///
    /// The seat grid is validated when the params are built.
    pub async fn create_airplane(&self, params: CreateAirplaneParams) -> Result<Airplane, AppError> {
        require_name(&params.name, "Airplane")?;

        if AirplaneTypeRepository::new(self.db)
            .find_by_id(params.airplane_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Airplane type {} not found",
                params.airplane_type_id
            )));
        }

        if let Some(airline_id) = params.airline_id {
            if AirlineRepository::new(self.db)
                .find_by_id(airline_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Airline {} not found",
                    airline_id
                )));
            }
        }

        Ok(AirplaneRepository::new(self.db).create(params).await?)
    }

    pub async fn list_airplanes(&self) -> Result<Vec<Airplane>, AppError> {
        Ok(AirplaneRepository::new(self.db).get_all().await?)
    }

    pub async fn create_crew(&self, params: CreateCrewParams) -> Result<Crew, AppError> {
        require_name(&params.first_name, "Crew first name")?;
        require_name(&params.last_name, "Crew last name")?;

        Ok(CrewRepository::new(self.db).create(params).await?)
    }

    pub async fn list_crews(&self) -> Result<Vec<Crew>, AppError> {
        Ok(CrewRepository::new(self.db).get_all().await?)
    }
}

fn airport_code_taken(code: &str) -> String {
    format!("Airport with IATA code '{}' already exists", code)
}

fn airline_code_taken(code: &str) -> String {
    format!("Airline with IATA code '{}' already exists", code)
}

fn require_name(name: &str, what: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} name must not be empty", what)));
    }

    Ok(())
}
