//! Reference data domain models: countries, cities, airports, airlines and crews.

use chrono_tz::Tz;

use crate::{
    model::inventory::{
        AirlineDto, AirportDto, CityDto, CountryDto, CreateAirlineDto, CreateAirportDto,
        CreateCityDto, CreateCountryDto, CreateCrewDto, CrewDto,
    },
    server::{error::catalog::CatalogError, model::rating::RatingSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

impl Country {
    pub fn from_entity(entity: entity::country::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCountryParams {
    pub name: String,
}

impl CreateCountryParams {
    pub fn from_dto(dto: CreateCountryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}

/// City with its country name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub country_name: String,
}

impl City {
    pub fn from_entity(
        entity: entity::city::Model,
        country: Option<entity::country::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country_id: entity.country_id,
            country_name: country.map(|c| c.name).unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            country_id: self.country_id,
            country_name: self.country_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCityParams {
    pub name: String,
    pub country_id: i32,
}

impl CreateCityParams {
    pub fn from_dto(dto: CreateCityDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            country_id: dto.country_id,
        }
    }
}

/// Airport with the names of its closest big city and that city's country.
///
/// These three names are what route and flight text filters match against.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub closest_big_city_id: i32,
    pub city_name: String,
    pub country_name: String,
    pub iata_code: Option<String>,
    pub timezone: String,
}

impl Airport {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Airport row
    /// - `city` - The airport's closest big city, if loaded
    /// - `country` - The city's country, if loaded
    pub fn from_entity(
        entity: entity::airport::Model,
        city: Option<&entity::city::Model>,
        country: Option<&entity::country::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            closest_big_city_id: entity.closest_big_city_id,
            city_name: city.map(|c| c.name.clone()).unwrap_or_default(),
            country_name: country.map(|c| c.name.clone()).unwrap_or_default(),
            iata_code: entity.iata_code,
            timezone: entity.timezone,
        }
    }

    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            name: self.name,
            closest_big_city_id: self.closest_big_city_id,
            closest_big_city: self.city_name,
            country: self.country_name,
            iata_code: self.iata_code,
            timezone: self.timezone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirportParams {
    pub name: String,
    pub closest_big_city_id: i32,
    pub iata_code: Option<String>,
    /// Canonical IANA name.
    pub timezone: String,
}

impl CreateAirportParams {
    /// Converts the request DTO, normalizing the IATA code to upper case.
    ///
    /// A blank code is treated as absent. A missing or blank time zone defaults to `UTC`.
    ///
    /// # Returns
    /// - `Ok(CreateAirportParams)` - Normalized params
    /// - `Err(CatalogError::InvalidTimezone)` - Time zone is not an IANA name
    pub fn from_dto(dto: CreateAirportDto) -> Result<Self, CatalogError> {
        Ok(Self {
            name: dto.name.trim().to_string(),
            closest_big_city_id: dto.closest_big_city_id,
            iata_code: normalize_code(dto.iata_code),
            timezone: parse_timezone(dto.timezone.as_deref())?,
        })
    }
}

/// Resolves a time zone name against the IANA database.
pub fn parse_timezone(name: Option<&str>) -> Result<String, CatalogError> {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("UTC");

    name.parse::<Tz>()
        .map(|tz| tz.name().to_string())
        .map_err(|_| CatalogError::InvalidTimezone(name.to_string()))
}

/// Airline with its fleet size and rating summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    pub id: i32,
    pub name: String,
    pub headquarters: Option<String>,
    pub iata_code: Option<String>,
    pub web_site_address: Option<String>,
    pub fleet_size: u64,
    pub rating: RatingSummary,
}

impl Airline {
    pub fn from_entity(
        entity: entity::airline::Model,
        fleet_size: u64,
        rating: RatingSummary,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            headquarters: entity.headquarters,
            iata_code: entity.iata_code,
            web_site_address: entity.web_site_address,
            fleet_size,
            rating,
        }
    }

    pub fn into_dto(self) -> AirlineDto {
        AirlineDto {
            id: self.id,
            name: self.name,
            headquarters: self.headquarters,
            iata_code: self.iata_code,
            web_site_address: self.web_site_address,
            fleet_size: self.fleet_size,
            overall_rating: self.rating.overall,
            average_boarding_deplaining_rating: self.rating.boarding_deplaining,
            average_crew_rating: self.rating.crew,
            average_services_rating: self.rating.services,
            average_entertainment_rating: self.rating.entertainment,
            average_wi_fi_rating: self.rating.wi_fi,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirlineParams {
    pub name: String,
    pub headquarters: Option<String>,
    pub iata_code: Option<String>,
    pub web_site_address: Option<String>,
}

impl CreateAirlineParams {
    pub fn from_dto(dto: CreateAirlineDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            headquarters: dto.headquarters,
            iata_code: normalize_code(dto.iata_code),
            web_site_address: dto.web_site_address,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crew {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Crew {
    pub fn from_entity(entity: entity::crew::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> CrewDto {
        let full_name = self.full_name();
        CrewDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            full_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCrewParams {
    pub first_name: String,
    pub last_name: String,
}

impl CreateCrewParams {
    pub fn from_dto(dto: CreateCrewDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
        }
    }
}

fn normalize_code(code: Option<String>) -> Option<String> {
    code.map(|c| c.trim().to_uppercase()).filter(|c| !c.is_empty())
}
