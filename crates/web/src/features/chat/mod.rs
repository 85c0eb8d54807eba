pub mod handlers;
mod hub;
pub mod routes;

pub use hub::ChatHub;
