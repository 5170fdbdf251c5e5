//! Route repository.
//!
//! Routes are returned with both endpoints resolved to airport, city and country names.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::airport::AirportRepository,
    model::route::{CreateRouteParams, Route, RouteEndpoint},
};

pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a route.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new route
    /// - `Err(DbErr)` - Insert failed, including the source ≠ destination check constraint
    pub async fn create(&self, params: CreateRouteParams) -> Result<i32, DbErr> {
        let entity = entity::route::ActiveModel {
            source_id: ActiveValue::Set(params.source_id),
            destination_id: ActiveValue::Set(params.destination_id),
            distance: ActiveValue::Set(params.distance),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Checks whether a route exists without resolving its endpoints.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Route::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Route>, DbErr> {
        let Some(entity) = entity::prelude::Route::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![entity]).await?.pop())
    }

    /// Gets all routes ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Route>, DbErr> {
        let entities = entity::prelude::Route::find()
            .order_by_asc(entity::route::Column::Id)
            .all(self.db)
            .await?;

        self.resolve(entities).await
    }

    /// Gets the routes with the given IDs, keyed by ID.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Route>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Route::find()
            .filter(entity::route::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(self
            .resolve(entities)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect())
    }

    /// Resolves both endpoints of each route.
    ///
    /// Routes whose airports cannot be loaded are dropped; foreign keys make that
    /// unreachable in practice.
    async fn resolve(&self, routes: Vec<entity::route::Model>) -> Result<Vec<Route>, DbErr> {
        let airport_ids: Vec<i32> = routes
            .iter()
            .flat_map(|r| [r.source_id, r.destination_id])
            .collect();

        let airports = AirportRepository::new(self.db)
            .get_by_ids(airport_ids)
            .await?;

        Ok(routes
            .into_iter()
            .filter_map(|route| {
                let source = airports.get(&route.source_id)?;
                let destination = airports.get(&route.destination_id)?;

                Some(Route {
                    id: route.id,
                    source: RouteEndpoint::from_airport(source),
                    destination: RouteEndpoint::from_airport(destination),
                    distance: route.distance,
                })
            })
            .collect())
    }
}
