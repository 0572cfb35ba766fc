//! Vehicle categories and their storage keys

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Vehicle category. Each one owns its own backing file and rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Car,
    Motorcycle,
    Truck,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Car, Category::Motorcycle, Category::Truck];

    /// Parse a category key ("auto", "moto", "camion"/"camión").
    ///
    /// Matching trims surrounding whitespace and ignores case. An empty key and
    /// an unknown key are reported with different messages.
    pub fn parse(key: &str) -> Result<Self, Error> {
        let normalized = key.trim().to_lowercase();
        match normalized.as_str() {
            "" => Err(Error::InvalidArgument(
                "Vehicle category cannot be empty".to_string(),
            )),
            "auto" => Ok(Category::Car),
            "moto" => Ok(Category::Motorcycle),
            "camion" | "camión" => Ok(Category::Truck),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown vehicle category: {}",
                key.trim()
            ))),
        }
    }

    /// Whether `key` names a known category
    pub fn is_valid_key(key: &str) -> bool {
        Self::parse(key).is_ok()
    }

    /// Canonical key used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Category::Car => "auto",
            Category::Motorcycle => "moto",
            Category::Truck => "camion",
        }
    }

    /// File stem of the collection backing this category
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::Car => "autos",
            Category::Motorcycle => "motos",
            Category::Truck => "camiones",
        }
    }

    /// Tax rate applied to the price
    pub fn tax_rate(&self) -> f64 {
        match self {
            Category::Car => 0.16,
            Category::Motorcycle => 0.10,
            Category::Truck => 0.12,
        }
    }

    /// Minimum number of fields in a stored line
    pub fn field_count(&self) -> usize {
        match self {
            Category::Car => 9,
            Category::Motorcycle | Category::Truck => 8,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Car => "car",
            Category::Motorcycle => "motorcycle",
            Category::Truck => "truck",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
