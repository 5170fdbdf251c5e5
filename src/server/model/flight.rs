//! Flight domain models and parameters.
//!
//! A flight composes a route, an airplane and a crew over a departure/arrival window.
//! Capacity is never stored: it is the airplane's seat grid, and availability is
//! capacity minus committed tickets.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use entity::flight::FlightStatus;

use crate::{
    model::flight::{
        CreateFlightDto, FlightDto, FlightListItemDto, FlightStatusDto, PaginatedFlightsDto,
        SeatDto, UpdateFlightStatusDto,
    },
    server::{
        error::{catalog::CatalogError, AppError},
        model::{airplane::Airplane, filter::TextFilter, inventory::Crew, route::Route},
        util::parse::parse_datetime,
    },
};

/// A `(row, seat)` address on a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    pub row: i32,
    pub seat: i32,
}

impl Seat {
    pub fn into_dto(self) -> SeatDto {
        SeatDto {
            row: self.row,
            seat: self.seat,
        }
    }
}

pub fn status_into_dto(status: FlightStatus) -> FlightStatusDto {
    match status {
        FlightStatus::Normal => FlightStatusDto::Normal,
        FlightStatus::Canceled => FlightStatusDto::Canceled,
        FlightStatus::Delayed => FlightStatusDto::Delayed,
        FlightStatus::Ahead => FlightStatusDto::Ahead,
        FlightStatus::Emergency => FlightStatusDto::Emergency,
    }
}

pub fn status_from_dto(status: FlightStatusDto) -> FlightStatus {
    match status {
        FlightStatusDto::Normal => FlightStatus::Normal,
        FlightStatusDto::Canceled => FlightStatus::Canceled,
        FlightStatusDto::Delayed => FlightStatus::Delayed,
        FlightStatusDto::Ahead => FlightStatus::Ahead,
        FlightStatusDto::Emergency => FlightStatus::Emergency,
    }
}

/// Flight row as listed, with availability computed from sold tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightListItem {
    pub id: i32,
    pub route: Route,
    pub airplane_id: i32,
    pub airplane_name: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub actual_arrival_time: Option<DateTime<Utc>>,
    pub tickets_available: i32,
}

impl FlightListItem {
    pub fn into_dto(self) -> FlightListItemDto {
        FlightListItemDto {
            id: self.id,
            route: self.route.into_dto(),
            airplane_id: self.airplane_id,
            airplane_name: self.airplane_name,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            status: status_into_dto(self.status),
            actual_arrival_time: self.actual_arrival_time,
            tickets_available: self.tickets_available,
        }
    }
}

/// Flight detail including crew and every taken seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub route: Route,
    pub airplane: Airplane,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub actual_arrival_time: Option<DateTime<Utc>>,
    pub emergent_destination_id: Option<i32>,
    pub crew: Vec<Crew>,
    /// Sorted by row then seat.
    pub taken_places: Vec<Seat>,
}

impl Flight {
    pub fn tickets_available(&self) -> i32 {
        self.airplane.capacity() - self.taken_places.len() as i32
    }

    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            route: self.route.into_dto(),
            airplane: self.airplane.into_dto(),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            status: status_into_dto(self.status),
            actual_arrival_time: self.actual_arrival_time,
            emergent_destination_id: self.emergent_destination_id,
            crew: self.crew.into_iter().map(Crew::into_dto).collect(),
            taken_places: self.taken_places.into_iter().map(Seat::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedFlights {
    pub flights: Vec<FlightListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedFlights {
    pub fn into_dto(self) -> PaginatedFlightsDto {
        PaginatedFlightsDto {
            flights: self
                .flights
                .into_iter()
                .map(FlightListItem::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Filters for flight listings.
///
/// `source` and `destination` use the same semantics as route filters. The departure
/// date is a calendar day in `date_offset`; the service turns it into a UTC range.
#[derive(Debug, Clone)]
pub struct FlightFilter {
    pub source: TextFilter,
    pub destination: TextFilter,
    pub departure_date: Option<NaiveDate>,
    pub date_offset: FixedOffset,
}

impl Default for FlightFilter {
    fn default() -> Self {
        Self {
            source: TextFilter::default(),
            destination: TextFilter::default(),
            departure_date: None,
            date_offset: Utc.fix(),
        }
    }
}

/// Validated parameters for creating a flight.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew_ids: Vec<i32>,
}

impl CreateFlightParams {
    /// Builds parameters, rejecting schedules where arrival is not after departure.
    ///
    /// Duplicate crew ids are collapsed.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParams)` - Valid parameters
    /// - `Err(CatalogError::InvalidSchedule)` - `arrival_time <= departure_time`
    pub fn new(
        route_id: i32,
        airplane_id: i32,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        mut crew_ids: Vec<i32>,
    ) -> Result<Self, CatalogError> {
        if arrival_time <= departure_time {
            return Err(CatalogError::InvalidSchedule {
                departure: departure_time,
                arrival: arrival_time,
            });
        }

        crew_ids.sort_unstable();
        crew_ids.dedup();

        Ok(Self {
            route_id,
            airplane_id,
            departure_time,
            arrival_time,
            crew_ids,
        })
    }

    /// Converts the request DTO, parsing its `YYYY-MM-DD HH:MM` UTC timestamps.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - A timestamp is malformed
    /// - `Err(AppError::CatalogErr)` - Invalid schedule
    pub fn from_dto(dto: CreateFlightDto) -> Result<Self, AppError> {
        let departure_time = parse_datetime(&dto.departure_time)?;
        let arrival_time = parse_datetime(&dto.arrival_time)?;

        Ok(Self::new(
            dto.route_id,
            dto.airplane_id,
            departure_time,
            arrival_time,
            dto.crew,
        )?)
    }
}

/// Validated status change.
///
/// Normal and canceled flights carry neither an actual arrival time nor an emergent
/// destination. Delayed and ahead flights carry the actual arrival time only. An
/// emergency keeps its diversion airport and, optionally, the actual arrival time.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFlightStatusParams {
    pub status: FlightStatus,
    pub actual_arrival_time: Option<DateTime<Utc>>,
    pub emergent_destination_id: Option<i32>,
}

impl UpdateFlightStatusParams {
    /// # Returns
    /// - `Ok(UpdateFlightStatusParams)` - Fields irrelevant to `status` are cleared
    /// - `Err(CatalogError::MissingActualArrival)` - Delayed or ahead without arrival time
    /// - `Err(CatalogError::MissingEmergentDestination)` - Emergency without destination
    pub fn new(
        status: FlightStatus,
        actual_arrival_time: Option<DateTime<Utc>>,
        emergent_destination_id: Option<i32>,
    ) -> Result<Self, CatalogError> {
        let (actual_arrival_time, emergent_destination_id) = match status {
            FlightStatus::Normal | FlightStatus::Canceled => (None, None),
            FlightStatus::Delayed | FlightStatus::Ahead => {
                let Some(actual) = actual_arrival_time else {
                    let name = if status == FlightStatus::Delayed {
                        "delayed"
                    } else {
                        "ahead"
                    };
                    return Err(CatalogError::MissingActualArrival(name));
                };
                (Some(actual), None)
            }
            FlightStatus::Emergency => {
                if emergent_destination_id.is_none() {
                    return Err(CatalogError::MissingEmergentDestination);
                }
                (actual_arrival_time, emergent_destination_id)
            }
        };

        Ok(Self {
            status,
            actual_arrival_time,
            emergent_destination_id,
        })
    }

    /// Converts the request DTO, parsing the `YYYY-MM-DD HH:MM` UTC arrival time.
    ///
    /// # Returns
    /// - `Ok(UpdateFlightStatusParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - The arrival time is malformed
    /// - `Err(AppError::CatalogErr)` - A field required by the status is missing
    pub fn from_dto(dto: UpdateFlightStatusDto) -> Result<Self, AppError> {
        let actual_arrival_time = dto
            .actual_arrival_time
            .as_deref()
            .map(parse_datetime)
            .transpose()?;

        Ok(Self::new(
            status_from_dto(dto.status),
            actual_arrival_time,
            dto.emergent_destination_id,
        )?)
    }
}
