// Static demo catalog served when the store is unavailable
use crate::application::catalog_source::{CatalogSource, CatalogTable, RawRecord};
use crate::error::SourceError;
use async_trait::async_trait;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct DemoCatalog;

impl DemoCatalog {
    pub fn new() -> Self {
        Self
    }

    fn records(table: CatalogTable) -> Vec<RawRecord> {
        let rows = match table {
            CatalogTable::Vehicles => vec![(
                "demo",
                json!({ "Merk": "Demo", "Model": "Demo Model" }),
            )],
            CatalogTable::VehicleDashboards => vec![(
                "demo-link",
                json!({ "Auto": ["demo"], "DashboardType": ["demo-dashboard"] }),
            )],
            CatalogTable::DashboardTypes => vec![(
                "demo-dashboard",
                json!({ "Naam": "Standard dashboard" }),
            )],
            CatalogTable::Solutions => vec![(
                "demo-solution",
                json!({
                    "AutoDashboard": ["demo-link"],
                    "OplossingType": "Complete installation kit",
                    "Prijs": 1299,
                    "Omschrijving": "Head unit, fitting panel and wiring harness."
                }),
            )],
            CatalogTable::PricedOptions => vec![
                (
                    "demo-headunit",
                    json!({
                        "Name": "LXRY Headunit Pro",
                        "Category": "Headunit",
                        "Price": 1299,
                        "Description": "High-resolution display with wireless CarPlay.",
                        "ImageUrl": "https://images.unsplash.com/photo-1503376780353-7e6692767b70"
                    }),
                ),
                (
                    "demo-interface",
                    json!({
                        "Name": "OEM Integration Interface",
                        "Category": "Interface",
                        "Price": 599,
                        "Description": "Retains factory controls and premium sound system."
                    }),
                ),
                (
                    "demo-camera",
                    json!({
                        "Name": "HD Reverse Camera",
                        "Category": "Camera",
                        "Price": 249,
                        "Description": "Night-vision optimized backup camera."
                    }),
                ),
                (
                    "demo-accessory",
                    json!({
                        "Name": "Wireless Adapter",
                        "Category": "Accessory",
                        "Price": 149,
                        "Description": "Adds wireless CarPlay support."
                    }),
                ),
            ],
        };

        rows.into_iter().map(|(id, fields)| raw_record(id, fields)).collect()
    }
}

fn raw_record(id: &str, fields: Value) -> RawRecord {
    RawRecord {
        id: id.to_string(),
        fields: match fields {
            Value::Object(map) => map,
            _ => Default::default(),
        },
    }
}

#[async_trait]
impl CatalogSource for DemoCatalog {
    async fn fetch_records(&self, table: CatalogTable) -> Result<Vec<RawRecord>, SourceError> {
        Ok(Self::records(table))
    }
}
