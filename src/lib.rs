pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod model;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
