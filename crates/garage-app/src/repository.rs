//! Repository adapters for persistence layer

use std::path::PathBuf;

use garage_infra::persistence::FileVehicleRepository;
use garage_types::Result;

use crate::app::VehicleService;
use crate::config::Config;

/// Open file-based vehicle repository
pub fn open_vehicle_repo(config: &Config) -> Result<FileVehicleRepository> {
    FileVehicleRepository::open(config.data_dir())
}

/// Open file-based vehicle repository at a custom directory
pub fn open_vehicle_repo_at(data_dir: PathBuf) -> Result<FileVehicleRepository> {
    FileVehicleRepository::open(data_dir)
}

/// Open the vehicle service over the configured data directory
pub fn open_vehicle_service(config: &Config) -> Result<VehicleService<FileVehicleRepository>> {
    Ok(VehicleService::new(open_vehicle_repo(config)?))
}
