//! Crew repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::inventory::{CreateCrewParams, Crew};

pub struct CrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCrewParams) -> Result<Crew, DbErr> {
        let entity = entity::crew::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Crew::from_entity(entity))
    }

    /// Gets all crew members ordered by last then first name.
    pub async fn get_all(&self) -> Result<Vec<Crew>, DbErr> {
        let entities = entity::prelude::Crew::find()
            .order_by_asc(entity::crew::Column::LastName)
            .order_by_asc(entity::crew::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Crew::from_entity).collect())
    }

    /// Returns the subset of `ids` that exist.
    pub async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Crew::find()
            .filter(entity::crew::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|c| c.id).collect())
    }

    /// Gets the crew assigned to a flight.
    pub async fn get_by_flight(&self, flight: &entity::flight::Model) -> Result<Vec<Crew>, DbErr> {
        let entities = flight
            .find_related(entity::prelude::Crew)
            .order_by_asc(entity::crew::Column::LastName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Crew::from_entity).collect())
    }
}
