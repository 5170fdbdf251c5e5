use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCountryDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub country_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCityDto {
    pub name: String,
    pub country_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirportDto {
    pub id: i32,
    pub name: String,
    pub closest_big_city_id: i32,
    pub closest_big_city: String,
    pub country: String,
    pub iata_code: Option<String>,
    pub timezone: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAirportDto {
    pub name: String,
    pub closest_big_city_id: i32,
    pub iata_code: Option<String>,
    /// IANA time zone name; `UTC` when omitted.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Averages are `null` for categories nobody rated; `overall_rating` is 0 when the
/// airline has no ratings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirlineDto {
    pub id: i32,
    pub name: String,
    pub headquarters: Option<String>,
    pub iata_code: Option<String>,
    pub web_site_address: Option<String>,
    pub fleet_size: u64,
    pub overall_rating: f64,
    pub average_boarding_deplaining_rating: Option<f64>,
    pub average_crew_rating: Option<f64>,
    pub average_services_rating: Option<f64>,
    pub average_entertainment_rating: Option<f64>,
    pub average_wi_fi_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAirlineDto {
    pub name: String,
    pub headquarters: Option<String>,
    pub iata_code: Option<String>,
    pub web_site_address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirplaneTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAirplaneTypeDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirplaneDto {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_per_row: i32,
    pub capacity: i32,
    pub airplane_type_id: i32,
    pub airplane_type_name: String,
    pub airline_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAirplanesDto {
    pub airplanes: Vec<AirplaneDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAirplaneDto {
    pub name: String,
    pub rows: i32,
    pub seats_per_row: i32,
    pub airplane_type_id: i32,
    pub airline_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CrewDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCrewDto {
    pub first_name: String,
    pub last_name: String,
}
