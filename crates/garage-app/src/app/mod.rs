//! Application use cases

pub mod vehicle_service;

pub use vehicle_service::VehicleService;
