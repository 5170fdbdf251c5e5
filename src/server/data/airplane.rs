//! Airplane and airplane type repositories.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::airplane::{
    Airplane, AirplaneType, CreateAirplaneParams, CreateAirplaneTypeParams,
};

pub struct AirplaneTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAirplaneTypeParams) -> Result<AirplaneType, DbErr> {
        let entity = entity::airplane_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AirplaneType::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<AirplaneType>, DbErr> {
        let entity = entity::prelude::AirplaneType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AirplaneType::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<AirplaneType>, DbErr> {
        let entities = entity::prelude::AirplaneType::find()
            .order_by_asc(entity::airplane_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AirplaneType::from_entity).collect())
    }
}

pub struct AirplaneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirplaneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an airplane from a validated seat grid.
    pub async fn create(&self, params: CreateAirplaneParams) -> Result<Airplane, DbErr> {
        let entity = entity::airplane::ActiveModel {
            name: ActiveValue::Set(params.name),
            rows: ActiveValue::Set(params.grid.rows),
            seats_per_row: ActiveValue::Set(params.grid.seats_per_row),
            airplane_type_id: ActiveValue::Set(params.airplane_type_id),
            airline_id: ActiveValue::Set(params.airline_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let airplane_type = entity::prelude::AirplaneType::find_by_id(entity.airplane_type_id)
            .one(self.db)
            .await?;

        Ok(Airplane::from_entity(entity, airplane_type))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Airplane>, DbErr> {
        let result = entity::prelude::Airplane::find_by_id(id)
            .find_also_related(entity::prelude::AirplaneType)
            .one(self.db)
            .await?;

        Ok(result.map(|(airplane, airplane_type)| Airplane::from_entity(airplane, airplane_type)))
    }

    pub async fn get_all(&self) -> Result<Vec<Airplane>, DbErr> {
        let results = entity::prelude::Airplane::find()
            .find_also_related(entity::prelude::AirplaneType)
            .order_by_asc(entity::airplane::Column::Name)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(airplane, airplane_type)| Airplane::from_entity(airplane, airplane_type))
            .collect())
    }

    /// Gets the airplanes with the given IDs, keyed by ID.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Airplane>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = entity::prelude::Airplane::find()
            .filter(entity::airplane::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::AirplaneType)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(airplane, airplane_type)| {
                let airplane = Airplane::from_entity(airplane, airplane_type);
                (airplane.id, airplane)
            })
            .collect())
    }

    /// Gets one page of an airline's fleet ordered by name.
    ///
    /// # Returns
    /// - `Ok((airplanes, total))` - The page and the airline's fleet size
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_airline_paginated(
        &self,
        airline_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Airplane>, u64), DbErr> {
        let paginator = entity::prelude::Airplane::find()
            .filter(entity::airplane::Column::AirlineId.eq(airline_id))
            .find_also_related(entity::prelude::AirplaneType)
            .order_by_asc(entity::airplane::Column::Name)
            .order_by_asc(entity::airplane::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let airplanes = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(airplane, airplane_type)| Airplane::from_entity(airplane, airplane_type))
            .collect();

        Ok((airplanes, total))
    }

    /// Counts airplanes per airline.
    ///
    /// Airlines without airplanes are absent from the map.
    pub async fn count_by_airlines(
        &self,
        airline_ids: Vec<i32>,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let owners: Vec<Option<i32>> = entity::prelude::Airplane::find()
            .select_only()
            .column(entity::airplane::Column::AirlineId)
            .filter(entity::airplane::Column::AirlineId.is_in(airline_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        for airline_id in owners.into_iter().flatten() {
            *counts.entry(airline_id).or_default() += 1;
        }

        Ok(counts)
    }
}
