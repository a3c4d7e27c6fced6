// Data source trait for raw catalog records
use crate::error::SourceError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// The five tables the configurator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogTable {
    Vehicles,
    VehicleDashboards,
    DashboardTypes,
    Solutions,
    PricedOptions,
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogTable::Vehicles => "vehicles",
            CatalogTable::VehicleDashboards => "vehicle_dashboards",
            CatalogTable::DashboardTypes => "dashboard_types",
            CatalogTable::Solutions => "solutions",
            CatalogTable::PricedOptions => "priced_options",
        };
        f.write_str(name)
    }
}

/// A store row before mapping: its id plus untyped fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every record of a table, in store order
    async fn fetch_records(&self, table: CatalogTable) -> Result<Vec<RawRecord>, SourceError>;
}
