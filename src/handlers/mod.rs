pub mod clients;
pub mod dashboard;
pub mod exports;
pub mod health;
pub mod routines;
