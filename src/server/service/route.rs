use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, route::RouteRepository},
    error::{internal::InternalError, AppError},
    model::route::{CreateRouteParams, Route, RouteFilter},
};

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a route between two existing airports.
    ///
    /// # Returns
    /// - `Ok(Route)` - Created route with resolved endpoints
    /// - `Err(AppError::NotFound)` - Source or destination airport does not exist
    pub async fn create(&self, params: CreateRouteParams) -> Result<Route, AppError> {
        let airports = AirportRepository::new(self.db)
            .get_by_ids(vec![params.source_id, params.destination_id])
            .await?;

        for airport_id in [params.source_id, params.destination_id] {
            if !airports.contains_key(&airport_id) {
                return Err(AppError::NotFound(format!(
                    "Airport {} not found",
                    airport_id
                )));
            }
        }

        let repo = RouteRepository::new(self.db);
        let id = repo.create(params).await?;

        repo.find_by_id(id).await?.ok_or_else(|| {
            InternalError::MissingAfterInsert {
                entity: "Route",
                id,
            }
            .into()
        })
    }

    pub async fn get(&self, id: i32) -> Result<Route, AppError> {
        RouteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Route {} not found", id)))
    }

    /// Lists routes matching every active filter, ordered by ID.
    ///
    /// Always reads committed state; no filter yields every route.
    pub async fn list(&self, filter: RouteFilter) -> Result<Vec<Route>, AppError> {
        let routes = RouteRepository::new(self.db).get_all().await?;

        Ok(routes
            .into_iter()
            .filter(|route| filter.matches(route))
            .collect())
    }
}
