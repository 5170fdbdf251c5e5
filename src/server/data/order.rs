//! Order repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an empty order for a user.
    pub async fn create(
        &self,
        user_id: i32,
        created_at: DateTime<Utc>,
    ) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an order only if it belongs to the given user.
    pub async fn find_for_user(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a page of a user's orders, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the orders
    /// - `page` - Zero-based page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((orders, total))` - The page and the user's total order count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }
}
