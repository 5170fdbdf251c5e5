pub use super::airline::Entity as Airline;
pub use super::airline_rating::Entity as AirlineRating;
pub use super::airplane::Entity as Airplane;
pub use super::airplane_type::Entity as AirplaneType;
pub use super::airport::Entity as Airport;
pub use super::city::Entity as City;
pub use super::country::Entity as Country;
pub use super::crew::Entity as Crew;
pub use super::flight::Entity as Flight;
pub use super::flight_crew::Entity as FlightCrew;
pub use super::order::Entity as Order;
pub use super::route::Entity as Route;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
