// Vehicle domain model and vehicle resolution
use crate::domain::year_range::matches_year_range;
use serde::{Deserialize, Serialize};

/// A car model/trim. Serialized with the store-facing keys the wizard consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "merk")]
    pub brand: String,
    pub model: String,
    #[serde(rename = "generatie")]
    pub generation: Option<String>,
    #[serde(rename = "jaarVan")]
    pub year_from: Option<i32>,
    #[serde(rename = "jaarTot")]
    pub year_to: Option<i32>,
}

/// Filter vehicles by exact brand and/or build year, preserving input order.
pub fn resolve_vehicles(vehicles: Vec<Vehicle>, brand: Option<&str>, year: Option<i32>) -> Vec<Vehicle> {
    vehicles
        .into_iter()
        .filter(|vehicle| brand.is_none_or(|brand| vehicle.brand == brand))
        .filter(|vehicle| {
            year.is_none_or(|year| matches_year_range(year, vehicle.year_from, vehicle.year_to))
        })
        .collect()
}
