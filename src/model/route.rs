use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One end of a route, flattened with its city and country names.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RouteEndpointDto {
    pub airport_id: i32,
    pub airport_name: String,
    pub city: String,
    pub country: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RouteDto {
    pub id: i32,
    pub source: RouteEndpointDto,
    pub destination: RouteEndpointDto,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRouteDto {
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: i32,
}
