use crate::application::catalog_source::CatalogTable;
use crate::error::ConfigError;
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Legacy variable names, applied over file and prefixed env settings.
const LEGACY_ENV_OVERRIDES: [(&str, &str); 9] = [
    ("AIRTABLE_API_KEY", "airtable.api_key"),
    ("AIRTABLE_BASE_ID", "airtable.base_id"),
    ("AIRTABLE_AUTO_TABLE", "airtable.tables.vehicles"),
    ("AIRTABLE_AUTODASHBOARDS_TABLE", "airtable.tables.vehicle_dashboards"),
    ("AIRTABLE_DASHBOARDTYPES_TABLE", "airtable.tables.dashboard_types"),
    ("AIRTABLE_OPLOSSINGEN_TABLE", "airtable.tables.solutions"),
    ("AIRTABLE_TABLE", "airtable.tables.priced_options"),
    ("FRONTEND_ORIGIN", "server.frontend_origin"),
    ("PORT", "server.port"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub airtable: AirtableSettings,
    /// Serve the built-in demo catalog when the store is unreachable
    #[serde(default)]
    pub enable_fallback_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
    pub frontend_origin: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 4000,
            frontend_origin: "http://localhost:5173".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AirtableSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub base_id: Option<String>,
    pub tables: TableNames,
}

impl Default for AirtableSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            base_id: None,
            tables: TableNames::default(),
        }
    }
}

/// Credentials the live source cannot start without.
#[derive(Debug, Clone, PartialEq)]
pub struct AirtableCredentials {
    pub api_key: String,
    pub base_id: String,
}

impl AirtableSettings {
    pub fn credentials(&self) -> Result<AirtableCredentials, ConfigError> {
        Ok(AirtableCredentials {
            api_key: require(&self.api_key, "airtable.api_key")?,
            base_id: require(&self.base_id, "airtable.base_id")?,
        })
    }
}

fn require(value: &Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::Missing(key))
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TableNames {
    pub vehicles: String,
    pub vehicle_dashboards: String,
    pub dashboard_types: String,
    pub solutions: String,
    pub priced_options: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            vehicles: "Auto".to_string(),
            vehicle_dashboards: "AutoDashboards".to_string(),
            dashboard_types: "DashboardTypes".to_string(),
            solutions: "Oplossingen".to_string(),
            priced_options: "Producten".to_string(),
        }
    }
}

impl TableNames {
    pub fn name_for(&self, table: CatalogTable) -> &str {
        match table {
            CatalogTable::Vehicles => &self.vehicles,
            CatalogTable::VehicleDashboards => &self.vehicle_dashboards,
            CatalogTable::DashboardTypes => &self.dashboard_types,
            CatalogTable::Solutions => &self.solutions,
            CatalogTable::PricedOptions => &self.priced_options,
        }
    }
}

pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::with_name("config/configurator").required(false))
        .add_source(
            config::Environment::with_prefix("CONFIGURATOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    for (var, key) in LEGACY_ENV_OVERRIDES {
        builder = builder.set_override_option(key, std::env::var(var).ok())?;
    }

    Ok(builder.build()?.try_deserialize()?)
}
