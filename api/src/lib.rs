pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;
pub mod views;
