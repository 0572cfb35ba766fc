//! Domain model types

pub mod vehicle;

pub use vehicle::{CarDetails, MotorcycleDetails, TruckDetails, Vehicle, VehicleKind};
