pub mod client_repo;
pub mod routine_repo;

pub use client_repo::ClientRepository;
pub use routine_repo::RoutineRepository;
