//! Flat-file record codec
//!
//! One vehicle per line, comma separated, no header:
//! id, brand, model, year, price, color, then the category fields
//! (car: doors, transmission, sedan; motorcycle: displacement, fairing;
//! truck: capacity, axles). Prices and capacities carry two decimals.

use garage_domain::model::{CarDetails, MotorcycleDetails, TruckDetails, Vehicle, VehicleKind};
use garage_types::{Category, FormatError};

/// Encode a vehicle as one stored line (without the line terminator).
///
/// Text that would split the line or spill onto the next one is refused, since
/// the stored line could not be decoded back.
pub fn encode(vehicle: &Vehicle) -> Result<String, FormatError> {
    let common = format!(
        "{},{},{},{},{:.2},{}",
        vehicle.id,
        storable(&vehicle.brand, "brand")?,
        storable(&vehicle.model, "model")?,
        vehicle.year,
        vehicle.price,
        storable(&vehicle.color, "color")?
    );
    Ok(match &vehicle.kind {
        VehicleKind::Car(car) => format!(
            "{},{},{},{}",
            common,
            car.doors,
            storable(&car.transmission, "transmission")?,
            car.sedan
        ),
        VehicleKind::Motorcycle(moto) => {
            format!("{},{},{}", common, moto.displacement_cc, moto.has_fairing)
        }
        VehicleKind::Truck(truck) => {
            format!("{},{:.2},{}", common, truck.load_capacity_tons, truck.axles)
        }
    })
}

/// Decode one stored line as a vehicle of `category`
pub fn decode(category: Category, line: &str) -> Result<Vehicle, FormatError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(FormatError::Empty);
    }

    let mut raw: Vec<&str> = line.split(',').map(str::trim).collect();
    // "a,b," holds two fields, not three
    while raw.last() == Some(&"") {
        raw.pop();
    }

    // Legacy writers rendered car prices with a decimal comma ("25000,00"),
    // which splits the price over fields 4 and 5.
    let joined_price;
    let fields: Vec<&str> = if category == Category::Car && raw.len() > category.field_count() {
        joined_price = format!("{}.{}", raw[4], raw[5]);
        let mut shifted = raw[..4].to_vec();
        shifted.push(joined_price.as_str());
        shifted.extend_from_slice(&raw[6..10]);
        shifted
    } else {
        raw
    };

    if fields.len() < category.field_count() {
        return Err(FormatError::FieldCount {
            category,
            expected: category.field_count(),
            found: fields.len(),
            line: line.to_string(),
        });
    }

    let kind = match category {
        Category::Car => VehicleKind::Car(CarDetails {
            doors: integer(fields[6], "doors")?,
            transmission: fields[7].to_string(),
            sedan: flag(fields[8]),
        }),
        Category::Motorcycle => VehicleKind::Motorcycle(MotorcycleDetails {
            displacement_cc: integer(fields[6], "displacement")?,
            has_fairing: flag(fields[7]),
        }),
        Category::Truck => VehicleKind::Truck(TruckDetails {
            load_capacity_tons: decimal(fields[6], "load_capacity")?,
            axles: integer(fields[7], "axles")?,
        }),
    };

    Ok(Vehicle {
        id: integer(fields[0], "id")?,
        brand: fields[1].to_string(),
        model: fields[2].to_string(),
        year: integer(fields[3], "year")?,
        price: decimal(fields[4], "price")?,
        color: fields[5].to_string(),
        kind,
    })
}

/// Identifier in front of the first delimiter, read without decoding the rest
/// of the line. Lets callers recognise the owner of a corrupt line.
pub fn leading_id(line: &str) -> Option<i32> {
    line.split(',').next()?.trim().parse().ok()
}

/// Text fields must survive the split on ',' and the line-based read
fn storable<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormatError> {
    if value.contains([',', '\n', '\r']) || value.trim() != value {
        return Err(FormatError::Unencodable {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn integer(value: &str, field: &'static str) -> Result<i32, FormatError> {
    value.parse().map_err(|_| FormatError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn decimal(value: &str, field: &'static str) -> Result<f64, FormatError> {
    value.parse().map_err(|_| FormatError::InvalidDecimal {
        field,
        value: value.to_string(),
    })
}

/// Anything but "true" (any case) reads as false
fn flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
