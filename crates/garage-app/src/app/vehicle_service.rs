//! Vehicle Service - validate-then-persist use cases
//!
//! Every mutation trims the vehicle's text fields and validates it first; any
//! violation (advisory ones included) blocks it. Lookups by id check their
//! arguments before touching storage.

use garage_domain::model::Vehicle;
use garage_domain::repository::VehicleRepository;
use garage_domain::service::{Validator, VehicleValidator};
use garage_types::{Category, Error, Result};

/// Use cases over a vehicle repository
pub struct VehicleService<R> {
    repository: R,
    validator: VehicleValidator,
}

impl<R: VehicleRepository> VehicleService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_validator(repository, VehicleValidator::new())
    }

    pub fn with_validator(repository: R, validator: VehicleValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate, reject a taken id, then store. Returns the vehicle as stored.
    pub fn create(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        let vehicle = vehicle.normalized();
        self.check(&vehicle)?;

        let category = vehicle.category();
        if self.repository.exists_by_id(vehicle.id, category) {
            return Err(Error::DuplicateId {
                category,
                id: vehicle.id,
            });
        }

        self.repository.create(&vehicle)?;
        log::info!("Created {} {}", category, vehicle.id);
        Ok(vehicle)
    }

    pub fn get(&self, id: i32, category: &str) -> Result<Vehicle> {
        check_id(id)?;
        let category = Category::parse(category)?;
        self.repository.read(id, category)
    }

    /// Validate, require an existing record, then rewrite it. Returns the
    /// vehicle as stored.
    pub fn update(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        let vehicle = vehicle.normalized();
        self.check(&vehicle)?;

        let category = vehicle.category();
        if !self.repository.exists_by_id(vehicle.id, category) {
            return Err(Error::NotFound {
                category,
                id: vehicle.id,
            });
        }

        self.repository.update(&vehicle)?;
        log::info!("Updated {} {}", category, vehicle.id);
        Ok(vehicle)
    }

    pub fn delete(&self, id: i32, category: &str) -> Result<()> {
        check_id(id)?;
        let category = Category::parse(category)?;
        if !self.repository.exists_by_id(id, category) {
            return Err(Error::NotFound { category, id });
        }

        self.repository.delete(id, category)?;
        log::info!("Deleted {} {}", category, id);
        Ok(())
    }

    pub fn list_all(&self, category: &str) -> Result<Vec<Vehicle>> {
        let category = Category::parse(category)?;
        self.repository.find_all(category)
    }

    /// Vehicles whose brand contains `brand`, ignoring case
    pub fn search_by_brand(&self, brand: &str, category: &str) -> Result<Vec<Vehicle>> {
        if brand.trim().is_empty() {
            return Err(Error::InvalidArgument("Brand cannot be empty".to_string()));
        }
        let category = Category::parse(category)?;

        let needle = brand.to_lowercase();
        Ok(self
            .repository
            .find_all(category)?
            .into_iter()
            .filter(|v| v.brand.to_lowercase().contains(&needle))
            .collect())
    }

    pub fn next_id(&self, category: &str) -> Result<i32> {
        let category = Category::parse(category)?;
        self.repository
            .next_id(category)
            .ok_or(Error::IdsExhausted { category })
    }

    /// Every rule violation for `vehicle`
    pub fn violations(&self, vehicle: &Vehicle) -> Vec<String> {
        self.validator.validate(vehicle)
    }

    fn check(&self, vehicle: &Vehicle) -> Result<()> {
        let errors = self.validator.validate(vehicle);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}

fn check_id(id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument(
            "ID must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::open_vehicle_repo_at;
    use garage_domain::model::{CarDetails, MotorcycleDetails, TruckDetails, VehicleKind};
    use garage_infra::persistence::FileVehicleRepository;
    use tempfile::{tempdir, TempDir};

    fn service() -> (TempDir, VehicleService<FileVehicleRepository>) {
        let dir = tempdir().unwrap();
        let repo = open_vehicle_repo_at(dir.path().join("data")).unwrap();
        let service = VehicleService::with_validator(repo, VehicleValidator::with_current_year(2025));
        (dir, service)
    }

    fn car(id: i32, brand: &str) -> Vehicle {
        Vehicle::new(
            id,
            brand,
            "Corolla",
            2020,
            25000.0,
            "Rojo",
            VehicleKind::Car(CarDetails {
                doors: 4,
                transmission: "Automática".to_string(),
                sedan: true,
            }),
        )
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, service) = service();
        let corolla = car(1, "Toyota");
        assert!(service.violations(&corolla).is_empty());

        service.create(&corolla).unwrap();
        assert_eq!(service.get(1, "auto").unwrap(), corolla);
        assert!(service.repository().exists_by_id(1, Category::Car));
    }

    #[test]
    fn test_create_invalid_reports_all_violations() {
        let (_dir, service) = service();
        let bad = Vehicle::new(
            1,
            "",
            "Corolla",
            1800,
            -1000.0,
            "Rojo123",
            VehicleKind::Car(CarDetails {
                doors: 10,
                transmission: "Turbo".to_string(),
                sedan: true,
            }),
        );
        let err = service.create(&bad).unwrap_err();
        assert!(err.violations().len() >= 5);
        assert!(service.list_all("auto").unwrap().is_empty());
    }

    #[test]
    fn test_advisory_violation_blocks_create() {
        let (_dir, service) = service();
        let mut coupe = car(1, "Mazda");
        if let VehicleKind::Car(ref mut details) = coupe.kind {
            details.doors = 2;
        }
        let err = service.create(&coupe).unwrap_err();
        assert!(matches!(err, Error::Validation(ref v) if v.len() == 1));
    }

    #[test]
    fn test_comma_in_model_is_rejected() {
        let (_dir, service) = service();
        let mut benz = car(1, "Mercedes");
        benz.model = "Clase C, AMG".to_string();

        let err = service.create(&benz).unwrap_err();
        assert!(matches!(err, Error::Validation(ref v) if v.iter().any(|m| m.contains("commas"))));
        assert!(service.list_all("auto").unwrap().is_empty());
        assert_eq!(service.next_id("auto").unwrap(), 1);
    }

    #[test]
    fn test_padded_text_is_stored_trimmed() {
        let (_dir, service) = service();
        let mut honda = car(1, "Honda");
        honda.brand = " Honda ".to_string();
        honda.color = "Rojo ".to_string();

        let stored = service.create(&honda).unwrap();
        assert_eq!(stored, car(1, "Honda"));
        assert_eq!(service.get(1, "auto").unwrap(), stored);

        let mut changed = stored.clone();
        changed.model = "  Civic".to_string();
        let stored = service.update(&changed).unwrap();
        assert_eq!(stored.model, "Civic");
        assert_eq!(service.get(1, "auto").unwrap(), stored);
    }

    #[test]
    fn test_next_id_exhausted() {
        let (_dir, service) = service();
        service.create(&car(i32::MAX, "Toyota")).unwrap();
        assert!(matches!(
            service.next_id("auto").unwrap_err(),
            Error::IdsExhausted { category: Category::Car }
        ));
    }

    #[test]
    fn test_create_duplicate_id() {
        let (_dir, service) = service();
        service.create(&car(1, "Toyota")).unwrap();
        let err = service.create(&car(1, "Honda")).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { id: 1, .. }));
        assert_eq!(service.list_all("auto").unwrap().len(), 1);
    }

    #[test]
    fn test_update() {
        let (_dir, service) = service();
        service.create(&car(1, "Toyota")).unwrap();

        let mut changed = car(1, "Toyota");
        changed.color = "Azul".to_string();
        service.update(&changed).unwrap();
        assert_eq!(service.get(1, "auto").unwrap().color, "Azul");
    }

    #[test]
    fn test_update_missing() {
        let (_dir, service) = service();
        let err = service.update(&car(42, "Toyota")).unwrap_err();
        assert!(matches!(err, Error::NotFound { id: 42, .. }));
    }

    #[test]
    fn test_update_validates_first() {
        let (_dir, service) = service();
        let mut bad = car(42, "Toyota");
        bad.price = 0.0;
        let err = service.update(&bad).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_delete() {
        let (_dir, service) = service();
        service.create(&car(1, "Toyota")).unwrap();
        service.delete(1, "auto").unwrap();
        assert!(matches!(
            service.get(1, "auto").unwrap_err(),
            Error::NotFound { .. }
        ));
        assert!(matches!(
            service.delete(1, "auto").unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn test_argument_preconditions() {
        let (_dir, service) = service();
        assert!(matches!(
            service.get(0, "auto").unwrap_err(),
            Error::InvalidArgument(_)
        ));
        assert!(matches!(
            service.delete(-3, "auto").unwrap_err(),
            Error::InvalidArgument(_)
        ));

        let empty = service.get(1, "  ").unwrap_err();
        assert!(matches!(empty, Error::InvalidArgument(ref m) if m.contains("empty")));
        let unknown = service.list_all("bicicleta").unwrap_err();
        assert!(matches!(unknown, Error::InvalidArgument(ref m) if m.contains("bicicleta")));
    }

    #[test]
    fn test_search_by_brand() {
        let (_dir, service) = service();
        service.create(&car(1, "Toyota")).unwrap();
        service.create(&car(2, "Honda")).unwrap();

        let found = service.search_by_brand("toyota", "auto").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].brand, "Toyota");

        let found = service.search_by_brand("Toy", "AUTO").unwrap();
        assert_eq!(found.len(), 1);

        assert!(service.search_by_brand("Ford", "auto").unwrap().is_empty());
        assert!(matches!(
            service.search_by_brand(" ", "auto").unwrap_err(),
            Error::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_next_id() {
        let (_dir, service) = service();
        assert_eq!(service.next_id("auto").unwrap(), 1);
        service.create(&car(1, "Toyota")).unwrap();
        service.create(&car(5, "Honda")).unwrap();
        assert_eq!(service.next_id("auto").unwrap(), 6);
        assert_eq!(service.next_id("moto").unwrap(), 1);
    }

    #[test]
    fn test_categories_are_independent() {
        let (_dir, service) = service();
        let moto = Vehicle::new(
            1,
            "Ducati",
            "Panigale",
            2024,
            30000.0,
            "Rojo",
            VehicleKind::Motorcycle(MotorcycleDetails {
                displacement_cc: 1103,
                has_fairing: true,
            }),
        );
        let truck = Vehicle::new(
            1,
            "Volvo",
            "FH16",
            2021,
            180000.0,
            "Blanco",
            VehicleKind::Truck(TruckDetails {
                load_capacity_tons: 30.0,
                axles: 5,
            }),
        );
        service.create(&car(1, "Toyota")).unwrap();
        service.create(&moto).unwrap();
        service.create(&truck).unwrap();

        assert_eq!(service.get(1, "moto").unwrap(), moto);
        assert_eq!(service.get(1, "camión").unwrap(), truck);
        assert_eq!(service.list_all("camion").unwrap().len(), 1);
    }
}
