//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a flight together with its route, airports and airplane
//!     let deps = factory::helpers::create_flight_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airplane = factory::airplane::AirplaneFactory::new(&db, airplane_type.id)
//!     .rows(3)
//!     .seats_per_row(4)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `location` - Create country and city entities
//! - `airport` - Create airport entities
//! - `airline` - Create airline entities
//! - `airplane` - Create airplane type and airplane entities
//! - `crew` - Create crew entities
//! - `route` - Create route entities
//! - `flight` - Create flight entities
//! - `order` - Create order and ticket entities
//! - `rating` - Create airline rating entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod airline;
pub mod airplane;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod helpers;
pub mod location;
pub mod order;
pub mod rating;
pub mod route;
pub mod user;

pub use airline::create_airline;
pub use airplane::{create_airplane, create_airplane_type};
pub use airport::create_airport;
pub use crew::create_crew;
pub use flight::create_flight;
pub use location::{create_city, create_country};
pub use order::{create_order, create_ticket};
pub use rating::RatingFactory;
pub use route::create_route;
pub use user::create_user;
