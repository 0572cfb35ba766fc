//! File-based vehicle repository implementation

use std::path::PathBuf;

use garage_domain::model::Vehicle;
use garage_domain::repository::VehicleRepository;
use garage_types::{Category, Error, Result, StoreError};

use crate::file_store::FileStore;
use crate::record_codec;

/// File-based implementation of VehicleRepository
///
/// One flat file per category (`autos.csv`, `motos.csv`, `camiones.csv`). Every
/// operation re-reads the file; lines that fail to decode are skipped by reads
/// and carried through untouched by rewrites.
pub struct FileVehicleRepository {
    store: FileStore,
}

impl FileVehicleRepository {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Create or open a repository rooted at `data_dir`
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let store = FileStore::open(data_dir).map_err(|source| Error::Storage {
            action: "open data directory",
            source,
        })?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    fn lines(&self, category: Category) -> std::result::Result<Vec<String>, StoreError> {
        self.store.read_lines(category.file_stem())
    }

    /// Decodable vehicles of `category`, in file order
    fn decoded(&self, category: Category) -> std::result::Result<Vec<Vehicle>, StoreError> {
        Ok(self
            .lines(category)?
            .iter()
            .filter_map(|line| record_codec::decode(category, line).ok())
            .collect())
    }
}

fn storage(action: &'static str) -> impl FnOnce(StoreError) -> Error {
    move |source| Error::Storage { action, source }
}

impl VehicleRepository for FileVehicleRepository {
    fn create(&self, vehicle: &Vehicle) -> Result<()> {
        let category = vehicle.category();
        let encoded = record_codec::encode(vehicle)?;
        let lines = self.lines(category).map_err(storage("save vehicle"))?;

        // Raw id prefix, so a corrupt line still reserves its id
        if lines
            .iter()
            .any(|line| record_codec::leading_id(line) == Some(vehicle.id))
        {
            return Err(Error::DuplicateId {
                category,
                id: vehicle.id,
            });
        }

        self.store
            .append_line(category.file_stem(), &encoded)
            .map_err(storage("save vehicle"))
    }

    fn read(&self, id: i32, category: Category) -> Result<Vehicle> {
        self.decoded(category)
            .map_err(storage("read vehicle"))?
            .into_iter()
            .find(|v| v.id == id)
            .ok_or(Error::NotFound { category, id })
    }

    fn update(&self, vehicle: &Vehicle) -> Result<()> {
        let category = vehicle.category();
        let encoded = record_codec::encode(vehicle)?;
        let lines = self.lines(category).map_err(storage("update vehicle"))?;

        let mut found = false;
        let updated: Vec<String> = lines
            .into_iter()
            .map(|line| match record_codec::decode(category, &line) {
                Ok(existing) if existing.id == vehicle.id => {
                    found = true;
                    encoded.clone()
                }
                _ => line,
            })
            .collect();

        if !found {
            return Err(Error::NotFound {
                category,
                id: vehicle.id,
            });
        }

        self.store
            .write_lines(category.file_stem(), &updated)
            .map_err(storage("update vehicle"))
    }

    fn delete(&self, id: i32, category: Category) -> Result<()> {
        let lines = self.lines(category).map_err(storage("delete vehicle"))?;
        let before = lines.len();

        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| match record_codec::decode(category, line) {
                Ok(existing) => existing.id != id,
                Err(_) => record_codec::leading_id(line) != Some(id),
            })
            .collect();

        if kept.len() == before {
            return Err(Error::NotFound { category, id });
        }

        self.store
            .write_lines(category.file_stem(), &kept)
            .map_err(storage("delete vehicle"))
    }

    fn find_all(&self, category: Category) -> Result<Vec<Vehicle>> {
        let lines = self.lines(category).map_err(storage("list vehicles"))?;

        let mut vehicles = Vec::with_capacity(lines.len());
        for line in &lines {
            match record_codec::decode(category, line) {
                Ok(vehicle) => vehicles.push(vehicle),
                Err(e) => log::warn!(
                    "Skipping malformed line in {}: {} ({})",
                    category.file_stem(),
                    line,
                    e
                ),
            }
        }
        Ok(vehicles)
    }

    fn exists_by_id(&self, id: i32, category: Category) -> bool {
        match self.decoded(category) {
            Ok(vehicles) => vehicles.iter().any(|v| v.id == id),
            Err(e) => {
                log::debug!("Treating {} {} as absent: {}", category, id, e);
                false
            }
        }
    }

    fn next_id(&self, category: Category) -> Option<i32> {
        match self
            .decoded(category)
            .ok()
            .and_then(|vehicles| vehicles.iter().map(|v| v.id).max())
        {
            Some(max) => max.checked_add(1).map(|id| id.max(1)),
            None => Some(1),
        }
    }
}
