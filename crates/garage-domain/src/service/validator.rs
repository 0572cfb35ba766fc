//! Vehicle validation rules
//!
//! Shared attribute rules run first, then the rules of the vehicle's category.
//! Advisory messages (prefixed "Warning:") are collected alongside hard
//! violations and block persistence the same way.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::model::{CarDetails, MotorcycleDetails, TruckDetails, Vehicle, VehicleKind};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_PRICE: f64 = 10_000_000.0;
const MAX_TEXT_LEN: usize = 50;

/// Characters that would split or break a stored line
const RECORD_SEPARATORS: [char; 3] = [',', '\n', '\r'];

/// Letters (ASCII and Latin-1 supplement) and spaces
static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{00FF} ]+$")
        .expect("color pattern is valid")
});

/// Produces the list of rule violations for a value; empty means valid
pub trait Validator<T> {
    fn validate(&self, item: &T) -> Vec<String>;

    fn is_valid(&self, item: &T) -> bool {
        self.validate(item).is_empty()
    }
}

/// Rule set for all vehicle categories
#[derive(Debug, Clone)]
pub struct VehicleValidator {
    current_year: i32,
}

impl Default for VehicleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleValidator {
    pub fn new() -> Self {
        Self {
            current_year: chrono::Local::now().year(),
        }
    }

    /// Validator with a fixed notion of "this year"
    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn max_year(&self) -> i32 {
        self.current_year + 1
    }

    fn common_rules(&self, vehicle: &Vehicle, errors: &mut Vec<String>) {
        if vehicle.id <= 0 {
            errors.push("ID must be greater than 0".to_string());
        }

        let brand = vehicle.brand.trim();
        if brand.is_empty() {
            errors.push("Brand cannot be empty".to_string());
        } else if brand.chars().count() < 2 {
            errors.push("Brand must have at least 2 characters".to_string());
        } else if brand.chars().count() > MAX_TEXT_LEN {
            errors.push(format!("Brand cannot exceed {} characters", MAX_TEXT_LEN));
        }
        if vehicle.brand.contains(RECORD_SEPARATORS) {
            errors.push("Brand cannot contain commas or line breaks".to_string());
        }

        if vehicle.model.trim().is_empty() {
            errors.push("Model cannot be empty".to_string());
        } else if vehicle.model.chars().count() > MAX_TEXT_LEN {
            errors.push(format!("Model cannot exceed {} characters", MAX_TEXT_LEN));
        }
        if vehicle.model.contains(RECORD_SEPARATORS) {
            errors.push("Model cannot contain commas or line breaks".to_string());
        }

        if vehicle.year < MIN_YEAR {
            errors.push(format!("Year cannot be earlier than {}", MIN_YEAR));
        } else if vehicle.year > self.max_year() {
            errors.push(format!("Year cannot be later than {}", self.max_year()));
        }

        if vehicle.price.is_nan() || vehicle.price <= 0.0 {
            errors.push("Price must be greater than 0".to_string());
        } else if vehicle.price > MAX_PRICE {
            errors.push("Price cannot exceed $10,000,000".to_string());
        }

        let color = vehicle.color.trim();
        if color.is_empty() {
            errors.push("Color cannot be empty".to_string());
        } else if color.chars().count() < 3 {
            errors.push("Color must have at least 3 characters".to_string());
        } else if !COLOR_PATTERN.is_match(&vehicle.color) {
            errors.push("Color may only contain letters and spaces".to_string());
        }
    }
}

fn car_rules(car: &CarDetails, errors: &mut Vec<String>) {
    if !(2..=5).contains(&car.doors) {
        errors.push("Number of doors must be between 2 and 5".to_string());
    }

    let transmission = car.transmission.trim().to_lowercase();
    if transmission.is_empty() {
        errors.push("Transmission type cannot be empty".to_string());
    } else if !matches!(transmission.as_str(), "manual" | "automática" | "automatica") {
        errors.push("Transmission type must be 'Manual' or 'Automática'".to_string());
    }

    if car.doors == 2 && car.sedan {
        errors.push("Warning: a 2-door car is usually not a sedan".to_string());
    }
}

fn motorcycle_rules(moto: &MotorcycleDetails, errors: &mut Vec<String>) {
    if moto.displacement_cc < 50 {
        errors.push("Displacement must be at least 50cc".to_string());
    } else if moto.displacement_cc > 2000 {
        errors.push("Displacement cannot exceed 2000cc".to_string());
    }

    if moto.displacement_cc >= 600 && !moto.has_fairing {
        errors.push("Warning: motorcycles of 600cc or more usually have a fairing".to_string());
    }
    if moto.displacement_cc < 150 && moto.has_fairing {
        errors.push("Warning: motorcycles under 150cc rarely have a fairing".to_string());
    }
}

fn truck_rules(truck: &TruckDetails, errors: &mut Vec<String>) {
    let capacity = truck.load_capacity_tons;
    if capacity.is_nan() || capacity <= 0.0 {
        errors.push("Load capacity must be greater than 0 tons".to_string());
    } else if capacity > 50.0 {
        errors.push("Load capacity cannot exceed 50 tons".to_string());
    }

    if truck.axles < 2 {
        errors.push("Number of axles must be at least 2".to_string());
    } else if truck.axles > 9 {
        errors.push("Number of axles cannot exceed 9".to_string());
    }

    if capacity > 20.0 && truck.axles < 4 {
        errors.push("A truck carrying more than 20 tons needs at least 4 axles".to_string());
    }
    if capacity <= 5.0 && truck.axles > 3 {
        errors.push(
            "Warning: a light truck (5 tons or less) usually has 2-3 axles".to_string(),
        );
    }
}

impl Validator<Vehicle> for VehicleValidator {
    fn validate(&self, vehicle: &Vehicle) -> Vec<String> {
        let mut errors = Vec::new();
        self.common_rules(vehicle, &mut errors);
        match &vehicle.kind {
            VehicleKind::Car(car) => car_rules(car, &mut errors),
            VehicleKind::Motorcycle(moto) => motorcycle_rules(moto, &mut errors),
            VehicleKind::Truck(truck) => truck_rules(truck, &mut errors),
        }
        errors
    }
}
