pub mod athletes;
pub mod chat;
pub mod pages;
pub mod workouts;
