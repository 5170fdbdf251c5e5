use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        airplane::AirplaneRepository, airport::AirportRepository, crew::CrewRepository,
        flight::FlightRepository, route::RouteRepository, ticket::TicketRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        filter::{page_offset, total_pages},
        flight::{
            CreateFlightParams, Flight, FlightFilter, FlightListItem, PaginatedFlights,
            UpdateFlightStatusParams,
        },
        route::RouteFilter,
    },
    util::parse::day_range_utc,
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a flight and assigns its crew in one transaction.
    ///
    /// The schedule has already been validated by `CreateFlightParams`. Overlapping
    /// flights for the same airplane are allowed.
    ///
    /// # Returns
    /// - `Ok(Flight)` - Created flight detail
    /// - `Err(AppError::NotFound)` - Route, airplane or a crew member does not exist
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, AppError> {
        let txn = self.db.begin().await?;

        if !RouteRepository::new(&txn).exists(params.route_id).await? {
            return Err(AppError::NotFound(format!(
                "Route {} not found",
                params.route_id
            )));
        }

        if AirplaneRepository::new(&txn)
            .find_by_id(params.airplane_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Airplane {} not found",
                params.airplane_id
            )));
        }

        let existing = CrewRepository::new(&txn)
            .find_existing_ids(&params.crew_ids)
            .await?;
        if let Some(missing) = params.crew_ids.iter().find(|id| !existing.contains(id)) {
            return Err(AppError::NotFound(format!("Crew {} not found", missing)));
        }

        let flight = FlightRepository::new(&txn).create(&params).await?;

        txn.commit().await?;

        tracing::info!(
            "Created flight {} on route {} departing {}",
            flight.id,
            flight.route_id,
            flight.departure_time
        );

        self.get(flight.id).await
    }

    /// Gets flight detail with route, airplane, crew and taken seats.
    ///
    /// # Returns
    /// - `Ok(Flight)` - Flight detail
    /// - `Err(AppError::NotFound)` - No flight with that ID
    pub async fn get(&self, id: i32) -> Result<Flight, AppError> {
        let Some(flight) = FlightRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Flight {} not found", id)));
        };

        let route = RouteRepository::new(self.db)
            .find_by_id(flight.route_id)
            .await?
            .ok_or_else(|| InternalError::MissingRelation {
                entity: "Route",
                id: flight.route_id,
                referrer: format!("flight {}", flight.id),
            })?;

        let airplane = AirplaneRepository::new(self.db)
            .find_by_id(flight.airplane_id)
            .await?
            .ok_or_else(|| InternalError::MissingRelation {
                entity: "Airplane",
                id: flight.airplane_id,
                referrer: format!("flight {}", flight.id),
            })?;

        let crew = CrewRepository::new(self.db).get_by_flight(&flight).await?;
        let taken_places = TicketRepository::new(self.db)
            .get_taken_seats(flight.id)
            .await?;

        Ok(Flight {
            id: flight.id,
            route,
            airplane,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            status: flight.status,
            actual_arrival_time: flight.actual_arrival_time,
            emergent_destination_id: flight.emergent_destination_id,
            crew,
            taken_places,
        })
    }

    /// Changes a flight's status.
    ///
    /// # Returns
    /// - `Ok(Flight)` - Updated flight detail
    /// - `Err(AppError::NotFound)` - No flight with that ID, or the emergent destination
    ///   airport does not exist
    pub async fn update_status(
        &self,
        id: i32,
        params: UpdateFlightStatusParams,
    ) -> Result<Flight, AppError> {
        if let Some(airport_id) = params.emergent_destination_id {
            if AirportRepository::new(self.db)
                .find_by_id(airport_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Airport {} not found",
                    airport_id
                )));
            }
        }

        let Some(flight) = FlightRepository::new(self.db)
            .update_status(id, &params)
            .await?
        else {
            return Err(AppError::NotFound(format!("Flight {} not found", id)));
        };

        tracing::info!("Flight {} status changed to {:?}", flight.id, flight.status);

        self.get(flight.id).await
    }

    /// Lists flights ordered by departure time, filtered and paginated.
    ///
    /// The departure date filter is applied in SQL as a half-open UTC range; the
    /// text filters are applied to the resolved route endpoints.
    ///
    /// # Arguments
    /// - `filter` - Source/destination text filters and optional departure date
    /// - `page` - Zero-based page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok(PaginatedFlights)` - Matching flights with seat availability
    /// - `Err(AppError::BadRequest)` - `page × per_page` is out of range
    /// - `Err(AppError)` - Database error
    pub async fn list(
        &self,
        filter: FlightFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedFlights, AppError> {
        let offset = page_offset(page, per_page)?;
        let range = filter
            .departure_date
            .map(|date| day_range_utc(date, filter.date_offset))
            .transpose()?;

        let flights = FlightRepository::new(self.db)
            .get_departing_between(range)
            .await?;

        let route_ids = flights.iter().map(|f| f.route_id).collect();
        let airplane_ids = flights.iter().map(|f| f.airplane_id).collect();
        let flight_ids = flights.iter().map(|f| f.id).collect();

        let routes = RouteRepository::new(self.db).get_by_ids(route_ids).await?;
        let airplanes = AirplaneRepository::new(self.db)
            .get_by_ids(airplane_ids)
            .await?;
        let sold = TicketRepository::new(self.db)
            .count_by_flights(flight_ids)
            .await?;

        let route_filter = RouteFilter {
            source: filter.source,
            destination: filter.destination,
            ..Default::default()
        };

        let mut matching = Vec::new();
        for flight in flights {
            let (Some(route), Some(airplane)) =
                (routes.get(&flight.route_id), airplanes.get(&flight.airplane_id))
            else {
                return Err(InternalError::MissingRelation {
                    entity: "Route or airplane",
                    id: flight.id,
                    referrer: format!("flight {}", flight.id),
                }
                .into());
            };

            if !route_filter.matches(route) {
                continue;
            }

            let sold_count = sold.get(&flight.id).copied().unwrap_or(0) as i32;

            matching.push(FlightListItem {
                id: flight.id,
                route: route.clone(),
                airplane_id: airplane.id,
                airplane_name: airplane.name.clone(),
                departure_time: flight.departure_time,
                arrival_time: flight.arrival_time,
                status: flight.status,
                actual_arrival_time: flight.actual_arrival_time,
                tickets_available: airplane.capacity() - sold_count,
            });
        }

        let total = matching.len() as u64;
        let flights = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(per_page as usize)
            .collect();

        Ok(PaginatedFlights {
            flights,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
