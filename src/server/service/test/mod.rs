mod booking;
mod flight;
mod inventory;
mod rating;
mod route;
