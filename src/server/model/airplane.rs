//! Airplane domain models.
//!
//! An airplane's seat grid is the only source of flight capacity: seats are addressed by
//! 1-based `(row, seat)` pairs within `rows × seats_per_row`.

use crate::{
    model::inventory::{
        AirplaneDto, AirplaneTypeDto, CreateAirplaneDto, CreateAirplaneTypeDto,
        PaginatedAirplanesDto,
    },
    server::error::catalog::CatalogError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AirplaneType {
    pub id: i32,
    pub name: String,
}

impl AirplaneType {
    pub fn from_entity(entity: entity::airplane_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> AirplaneTypeDto {
        AirplaneTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirplaneTypeParams {
    pub name: String,
}

impl CreateAirplaneTypeParams {
    pub fn from_dto(dto: CreateAirplaneTypeDto) -> Self {
        Self { name: dto.name }
    }
}

/// Seat layout of an airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatGrid {
    pub rows: i32,
    pub seats_per_row: i32,
}

impl SeatGrid {
    /// Validates that both dimensions are positive and the seat count fits in an `i32`.
    ///
    /// # Returns
    /// - `Ok(SeatGrid)` - Valid grid
    /// - `Err(CatalogError::InvalidSeatGrid)` - Either dimension is zero or negative, or
    ///   `rows × seats_per_row` overflows
    pub fn new(rows: i32, seats_per_row: i32) -> Result<Self, CatalogError> {
        if rows <= 0 || seats_per_row <= 0 || rows.checked_mul(seats_per_row).is_none() {
            return Err(CatalogError::InvalidSeatGrid {
                rows,
                seats_per_row,
            });
        }

        Ok(Self {
            rows,
            seats_per_row,
        })
    }

    /// Total number of seats.
    pub fn capacity(&self) -> i32 {
        self.rows.saturating_mul(self.seats_per_row)
    }

    /// Whether `(row, seat)` addresses a seat inside the grid.
    pub fn contains(&self, row: i32, seat: i32) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.seats_per_row).contains(&seat)
    }
}

/// Airplane with its type name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    pub id: i32,
    pub name: String,
    pub grid: SeatGrid,
    pub airplane_type_id: i32,
    pub airplane_type_name: String,
    pub airline_id: Option<i32>,
}

impl Airplane {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Airplane row
    /// - `airplane_type` - Its airplane type, if it was loaded
    pub fn from_entity(
        entity: entity::airplane::Model,
        airplane_type: Option<entity::airplane_type::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            grid: SeatGrid {
                rows: entity.rows,
                seats_per_row: entity.seats_per_row,
            },
            airplane_type_id: entity.airplane_type_id,
            airplane_type_name: airplane_type.map(|t| t.name).unwrap_or_default(),
            airline_id: entity.airline_id,
        }
    }

    pub fn capacity(&self) -> i32 {
        self.grid.capacity()
    }

    pub fn into_dto(self) -> AirplaneDto {
        AirplaneDto {
            id: self.id,
            name: self.name,
            rows: self.grid.rows,
            seats_per_row: self.grid.seats_per_row,
            capacity: self.grid.capacity(),
            airplane_type_id: self.airplane_type_id,
            airplane_type_name: self.airplane_type_name,
            airline_id: self.airline_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirplaneParams {
    pub name: String,
    pub grid: SeatGrid,
    pub airplane_type_id: i32,
    pub airline_id: Option<i32>,
}

impl CreateAirplaneParams {
    /// Converts the request DTO, validating the seat grid.
    ///
    /// # Returns
    /// - `Ok(CreateAirplaneParams)` - Valid parameters
    /// - `Err(CatalogError::InvalidSeatGrid)` - Rows or seats per row not positive
    pub fn from_dto(dto: CreateAirplaneDto) -> Result<Self, CatalogError> {
        Ok(Self {
            name: dto.name,
            grid: SeatGrid::new(dto.rows, dto.seats_per_row)?,
            airplane_type_id: dto.airplane_type_id,
            airline_id: dto.airline_id,
        })
    }
}

/// One page of an airline's fleet.
#[derive(Debug, Clone)]
pub struct PaginatedAirplanes {
    pub airplanes: Vec<Airplane>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAirplanes {
    pub fn into_dto(self) -> PaginatedAirplanesDto {
        PaginatedAirplanesDto {
            airplanes: self.airplanes.into_iter().map(Airplane::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
