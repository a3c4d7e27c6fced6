// Configurator service - Assembles wizard read models from catalog tables
use crate::application::catalog_source::{CatalogSource, CatalogTable, RawRecord};
use crate::domain::dashboard::{dashboards_for_vehicle, DashboardSummary};
use crate::domain::quote::{compute_quote, PricedOption, Quote, Selection};
use crate::domain::solution::{solutions_for, SolutionSummary};
use crate::domain::vehicle::{resolve_vehicles, Vehicle};
use crate::error::{ConfiguratorError, MappingError};
use crate::infrastructure::catalog_mapper::{
    map_dashboard_type, map_link, map_priced_option, map_records, map_solution, map_vehicle,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPayload {
    pub options: Vec<PricedOption>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub quote: Quote,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ConfiguratorService {
    source: Arc<dyn CatalogSource>,
    fallback: Option<Arc<dyn CatalogSource>>,
}

impl ConfiguratorService {
    pub fn new(source: Arc<dyn CatalogSource>, fallback: Option<Arc<dyn CatalogSource>>) -> Self {
        Self { source, fallback }
    }

    pub async fn get_options(&self) -> Result<OptionsPayload, ConfiguratorError> {
        let options = self.priced_options().await?;
        Ok(OptionsPayload {
            options,
            updated_at: Utc::now(),
        })
    }

    pub async fn get_models(
        &self,
        brand: Option<&str>,
        year: Option<i32>,
    ) -> Result<Vec<Vehicle>, ConfiguratorError> {
        let vehicles = self.load(CatalogTable::Vehicles, map_vehicle).await?;
        Ok(resolve_vehicles(vehicles, brand, year))
    }

    pub async fn get_dashboards(
        &self,
        vehicle_id: &str,
    ) -> Result<Vec<DashboardSummary>, ConfiguratorError> {
        let (links, types) = futures::try_join!(
            self.load(CatalogTable::VehicleDashboards, map_link),
            self.load(CatalogTable::DashboardTypes, map_dashboard_type),
        )?;
        Ok(dashboards_for_vehicle(vehicle_id, &links, &types))
    }

    pub async fn get_solutions(
        &self,
        vehicle_id: &str,
        dashboard_type_id: &str,
    ) -> Result<Vec<SolutionSummary>, ConfiguratorError> {
        let (links, solutions) = futures::try_join!(
            self.load(CatalogTable::VehicleDashboards, map_link),
            self.load(CatalogTable::Solutions, map_solution),
        )?;
        Ok(solutions_for(vehicle_id, dashboard_type_id, &links, &solutions))
    }

    pub async fn post_quote(&self, selection: &Selection) -> Result<QuotePayload, ConfiguratorError> {
        let catalog = self.priced_options().await?;
        tracing::debug!(
            "Quoting {} selection(s) for model {:?}",
            selection.selections.len(),
            selection.model
        );
        Ok(QuotePayload {
            quote: compute_quote(&catalog, selection),
            generated_at: Utc::now(),
        })
    }

    async fn priced_options(&self) -> Result<Vec<PricedOption>, ConfiguratorError> {
        self.load(CatalogTable::PricedOptions, map_priced_option).await
    }

    async fn load<T>(
        &self,
        table: CatalogTable,
        map: fn(&RawRecord) -> Result<T, MappingError>,
    ) -> Result<Vec<T>, ConfiguratorError> {
        let records = self.fetch(table).await?;
        Ok(map_records(&records, map)?)
    }

    /// Fetch a table, substituting the fallback source on upstream failure.
    async fn fetch(&self, table: CatalogTable) -> Result<Vec<RawRecord>, ConfiguratorError> {
        match self.source.fetch_records(table).await {
            Ok(records) => Ok(records),
            Err(err) => match &self.fallback {
                Some(fallback) => {
                    tracing::warn!("Fetching {} failed, serving fallback data: {}", table, err);
                    Ok(fallback.fetch_records(table).await?)
                }
                None => Err(err.into()),
            },
        }
    }
}
