//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_vehicle_repo;

pub use file_vehicle_repo::FileVehicleRepository;
