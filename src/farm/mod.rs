pub mod farm_handlers;
pub mod farm_models;
pub mod farm_repository;

pub use farm_repository::FarmRepository;
