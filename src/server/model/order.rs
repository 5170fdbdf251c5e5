//! Order and ticket domain models.

use chrono::{DateTime, Utc};

use crate::model::order::{
    CreateOrderDto, OrderDto, PaginatedOrdersDto, TicketDto, TicketRequestDto,
};

/// A seat requested in an order, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    pub flight_id: i32,
    pub row: i32,
    pub seat: i32,
}

impl TicketRequest {
    pub fn from_dto(dto: TicketRequestDto) -> Self {
        Self {
            flight_id: dto.flight_id,
            row: dto.row,
            seat: dto.seat,
        }
    }
}

/// Parameters for placing an order on behalf of an authenticated user.
#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub user_id: i32,
    /// Tickets in request order.
    pub tickets: Vec<TicketRequest>,
}

impl PlaceOrderParams {
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Self {
        Self {
            user_id,
            tickets: dto.tickets.into_iter().map(TicketRequest::from_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub flight_id: i32,
    pub row: i32,
    pub seat: i32,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            flight_id: entity.flight_id,
            row: entity.row,
            seat: entity.seat,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            flight_id: self.flight_id,
            row: self.row,
            seat: self.seat,
        }
    }
}

/// Committed order with its tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<Ticket>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model, tickets: Vec<entity::ticket::Model>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            created_at: entity.created_at,
            tickets: tickets.into_iter().map(Ticket::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            created_at: self.created_at,
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
