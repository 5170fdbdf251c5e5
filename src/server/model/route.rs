//! Route domain models and filtering.

use crate::{
    model::route::{CreateRouteDto, RouteDto, RouteEndpointDto},
    server::{
        error::catalog::CatalogError,
        model::{filter::TextFilter, inventory::Airport},
    },
};

/// One end of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEndpoint {
    pub airport_id: i32,
    pub airport_name: String,
    pub city_name: String,
    pub country_name: String,
}

impl RouteEndpoint {
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            airport_id: airport.id,
            airport_name: airport.name.clone(),
            city_name: airport.city_name.clone(),
            country_name: airport.country_name.clone(),
        }
    }

    pub fn into_dto(self) -> RouteEndpointDto {
        RouteEndpointDto {
            airport_id: self.airport_id,
            airport_name: self.airport_name,
            city: self.city_name,
            country: self.country_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: i32,
    pub source: RouteEndpoint,
    pub destination: RouteEndpoint,
    /// Kilometers.
    pub distance: i32,
}

impl Route {
    pub fn into_dto(self) -> RouteDto {
        RouteDto {
            id: self.id,
            source: self.source.into_dto(),
            destination: self.destination.into_dto(),
            distance: self.distance,
        }
    }
}

/// Filters for route listings.
///
/// `source` and `destination` match the endpoint airport name or its city name;
/// `source_country` and `destination_country` match the endpoint's country name;
/// `source_city` and `destination_city` match the city name only. All active filters
/// must match.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub source: TextFilter,
    pub destination: TextFilter,
    pub source_country: TextFilter,
    pub destination_country: TextFilter,
    pub source_city: TextFilter,
    pub destination_city: TextFilter,
}

/// Splits a `<from>-<to>` city pair into source and destination city filters.
///
/// The first and last `-`separated parts are used, so a value without `-` constrains
/// both ends to the same text.
pub fn city_pair(value: Option<&str>) -> (TextFilter, TextFilter) {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return (TextFilter::default(), TextFilter::default());
    };

    let mut parts = value.split('-');
    let first = parts.next();
    let last = parts.next_back().or(first);

    (TextFilter::new(first), TextFilter::new(last))
}

impl RouteFilter {
    pub fn matches(&self, route: &Route) -> bool {
        self.source.matches_any([
            route.source.airport_name.as_str(),
            route.source.city_name.as_str(),
        ]) && self.destination.matches_any([
            route.destination.airport_name.as_str(),
            route.destination.city_name.as_str(),
        ]) && self.source_country.matches(&route.source.country_name)
            && self
                .destination_country
                .matches(&route.destination.country_name)
            && self.source_city.matches(&route.source.city_name)
            && self.destination_city.matches(&route.destination.city_name)
    }
}

#[derive(Debug, Clone)]
pub struct CreateRouteParams {
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: i32,
}

impl CreateRouteParams {
    /// Converts the request DTO, checking the endpoints differ and the distance is not
    /// negative.
    pub fn from_dto(dto: CreateRouteDto) -> Result<Self, CatalogError> {
        if dto.source_id == dto.destination_id {
            return Err(CatalogError::SameEndpoints);
        }
        if dto.distance < 0 {
            return Err(CatalogError::NegativeDistance(dto.distance));
        }

        Ok(Self {
            source_id: dto.source_id,
            destination_id: dto.destination_id,
            distance: dto.distance,
        })
    }
}
