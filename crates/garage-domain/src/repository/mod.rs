//! Repository trait definitions for data persistence

use garage_types::{Category, Result};

use crate::model::Vehicle;

/// Per-category vehicle persistence.
///
/// Every call works against the stored collection directly; there is no cache
/// between calls.
pub trait VehicleRepository {
    /// Append a new vehicle. Fails with `DuplicateId` if its id is already taken.
    fn create(&self, vehicle: &Vehicle) -> Result<()>;

    /// First vehicle of `category` with the given id
    fn read(&self, id: i32, category: Category) -> Result<Vehicle>;

    /// Replace the stored vehicle that has the same id
    fn update(&self, vehicle: &Vehicle) -> Result<()>;

    /// Remove the vehicle with the given id
    fn delete(&self, id: i32, category: Category) -> Result<()>;

    /// All readable vehicles of `category`, in stored order
    fn find_all(&self, category: Category) -> Result<Vec<Vehicle>>;

    /// Never fails; storage problems count as "absent"
    fn exists_by_id(&self, id: i32, category: Category) -> bool;

    /// One past the highest stored id, or 1 for an empty collection.
    /// `None` once the highest stored id is `i32::MAX`.
    fn next_id(&self, category: Category) -> Option<i32>;
}
