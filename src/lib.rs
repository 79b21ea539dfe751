pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
