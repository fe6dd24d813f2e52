pub mod equipment_handlers;
pub mod equipment_models;
pub mod equipment_repository;

pub use equipment_repository::EquipmentRepository;
