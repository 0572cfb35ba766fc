//! Vehicle type definitions

use garage_types::Category;
use serde::{Deserialize, Serialize};

/// A vehicle record: shared attributes plus the category-specific details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Positive identifier, unique within its category
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub color: String,
    #[serde(flatten)]
    pub kind: VehicleKind,
}

/// Category-specific attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum VehicleKind {
    Car(CarDetails),
    Motorcycle(MotorcycleDetails),
    Truck(TruckDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub doors: i32,
    /// "Manual" or "Automática"
    pub transmission: String,
    pub sedan: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorcycleDetails {
    pub displacement_cc: i32,
    pub has_fairing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckDetails {
    pub load_capacity_tons: f64,
    pub axles: i32,
}

impl Vehicle {
    pub fn new(
        id: i32,
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price: f64,
        color: impl Into<String>,
        kind: VehicleKind,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            model: model.into(),
            year,
            price,
            color: color.into(),
            kind,
        }
        .normalized()
    }

    /// Copy with surrounding whitespace removed from every text field, the
    /// form in which the vehicle is stored
    pub fn normalized(&self) -> Self {
        let mut vehicle = self.clone();
        trim_in_place(&mut vehicle.brand);
        trim_in_place(&mut vehicle.model);
        trim_in_place(&mut vehicle.color);
        if let VehicleKind::Car(car) = &mut vehicle.kind {
            trim_in_place(&mut car.transmission);
        }
        vehicle
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Tax owed on the price at the category's rate
    pub fn tax(&self) -> f64 {
        self.price * self.category().tax_rate()
    }
}

impl VehicleKind {
    pub fn category(&self) -> Category {
        match self {
            VehicleKind::Car(_) => Category::Car,
            VehicleKind::Motorcycle(_) => Category::Motorcycle,
            VehicleKind::Truck(_) => Category::Truck,
        }
    }
}

fn trim_in_place(text: &mut String) {
    let trimmed = text.trim();
    if trimmed.len() != text.len() {
        *text = trimmed.to_string();
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | {} {} ({}) | Color: {} | Price: ${:.2}",
            self.id, self.brand, self.model, self.year, self.color, self.price
        )?;
        match &self.kind {
            VehicleKind::Car(car) => write!(
                f,
                " | Doors: {} | Transmission: {} | Sedan: {}",
                car.doors,
                car.transmission,
                yes_no(car.sedan)
            ),
            VehicleKind::Motorcycle(moto) => write!(
                f,
                " | Displacement: {}cc | Fairing: {}",
                moto.displacement_cc,
                yes_no(moto.has_fairing)
            ),
            VehicleKind::Truck(truck) => write!(
                f,
                " | Capacity: {:.2} tons | Axles: {}",
                truck.load_capacity_tons, truck.axles
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Vehicle {
        Vehicle::new(
            1,
            "Toyota",
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
    fn test_tax_per_category() {
        assert!((corolla().tax() - 4000.0).abs() < 1e-9);

        let moto = Vehicle::new(
            2,
            "Yamaha",
            "MT-07",
            2022,
            8000.0,
            "Azul",
            VehicleKind::Motorcycle(MotorcycleDetails {
                displacement_cc: 689,
                has_fairing: false,
            }),
        );
        assert!((moto.tax() - 800.0).abs() < 1e-9);

        let truck = Vehicle::new(
            3,
            "Volvo",
            "FH16",
            2019,
            100000.0,
            "Blanco",
            VehicleKind::Truck(TruckDetails {
                load_capacity_tons: 25.0,
                axles: 5,
            }),
        );
        assert!((truck.tax() - 12000.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let text = corolla().to_string();
        assert_eq!(
            text,
            "ID: 1 | Toyota Corolla (2020) | Color: Rojo | Price: $25000.00 \
             | Doors: 4 | Transmission: Automática | Sedan: Yes"
        );
    }

    #[test]
    fn test_new_trims_text_fields() {
        let padded = Vehicle::new(
            1,
            " Toyota ",
            "Corolla\t",
            2020,
            25000.0,
            "  Rojo",
            VehicleKind::Car(CarDetails {
                doors: 4,
                transmission: " Automática ".to_string(),
                sedan: true,
            }),
        );
        assert_eq!(padded, corolla());
    }

    #[test]
    fn test_normalized_leaves_clean_vehicle_alone() {
        let mut moto = Vehicle::new(
            2,
            "Honda",
            "CB500",
            2021,
            6000.0,
            "Negro",
            VehicleKind::Motorcycle(MotorcycleDetails {
                displacement_cc: 471,
                has_fairing: false,
            }),
        );
        assert_eq!(moto.normalized(), moto);

        moto.brand = " Honda ".to_string();
        assert_eq!(moto.normalized().brand, "Honda");
    }

    #[test]
    fn test_json_carries_category_tag() {
        let json = serde_json::to_value(corolla()).unwrap();
        assert_eq!(json["category"], "car");
        assert_eq!(json["doors"], 4);

        let back: Vehicle = serde_json::from_value(json).unwrap();
        assert_eq!(back, corolla());
    }
}
