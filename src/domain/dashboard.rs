// Dashboard domain model and vehicle-to-dashboard linking
use crate::domain::lookup::{find_by_id, Identified, Lookup};
use serde::Serialize;

/// Association between a vehicle and a dashboard type.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDashboardLink {
    pub id: String,
    pub vehicle_id: Option<String>,
    pub dashboard_type_id: Option<String>,
}

impl VehicleDashboardLink {
    pub fn joins(&self, vehicle_id: &str) -> bool {
        self.vehicle_id.as_deref() == Some(vehicle_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardType {
    pub id: String,
    pub name: String,
    /// Recognition photo shown in the wizard
    pub image_url: Option<String>,
}

impl Identified for DashboardType {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<&DashboardType> for DashboardSummary {
    fn from(dashboard_type: &DashboardType) -> Self {
        Self {
            id: dashboard_type.id.clone(),
            name: dashboard_type.name.clone(),
            image_url: dashboard_type.image_url.clone(),
        }
    }
}

/// Dashboard types configured for a vehicle, in link order.
///
/// Links pointing at an unknown dashboard type are skipped.
pub fn dashboards_for_vehicle(
    vehicle_id: &str,
    links: &[VehicleDashboardLink],
    types: &[DashboardType],
) -> Vec<DashboardSummary> {
    links
        .iter()
        .filter(|link| link.joins(vehicle_id))
        .filter_map(|link| match find_by_id(types, link.dashboard_type_id.as_deref()) {
            Lookup::Found(dashboard_type) => Some(DashboardSummary::from(dashboard_type)),
            Lookup::NotFound => {
                tracing::debug!(
                    "Dropping link {} - dashboard type {:?} not found",
                    link.id,
                    link.dashboard_type_id
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: &str, vehicle_id: Option<&str>, dashboard_type_id: Option<&str>) -> VehicleDashboardLink {
        VehicleDashboardLink {
            id: id.to_string(),
            vehicle_id: vehicle_id.map(str::to_string),
            dashboard_type_id: dashboard_type_id.map(str::to_string),
        }
    }

    fn dashboard_type(id: &str, name: &str) -> DashboardType {
        DashboardType {
            id: id.to_string(),
            name: name.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_single_link() {
        let links = [link("L1", Some("v1"), Some("dt1"))];
        let types = [dashboard_type("dt1", "Classic")];

        let dashboards = dashboards_for_vehicle("v1", &links, &types);
        assert_eq!(
            dashboards,
            vec![DashboardSummary {
                id: "dt1".to_string(),
                name: "Classic".to_string(),
                image_url: None,
            }]
        );
    }

    #[test]
    fn test_broken_and_foreign_links_are_dropped() {
        let links = [
            link("L1", Some("v1"), Some("missing")),
            link("L2", Some("v2"), Some("dt1")),
            link("L3", None, Some("dt1")),
            link("L4", Some("v1"), None),
            link("L5", Some("v1"), Some("dt2")),
        ];
        let types = [dashboard_type("dt1", "Classic"), dashboard_type("dt2", "Facelift")];

        let names: Vec<_> = dashboards_for_vehicle("v1", &links, &types)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Facelift"]);
    }

    #[test]
    fn test_preserves_link_order() {
        let links = [
            link("L1", Some("v1"), Some("dt2")),
            link("L2", Some("v1"), Some("dt1")),
        ];
        let types = [dashboard_type("dt1", "Classic"), dashboard_type("dt2", "Facelift")];

        let ids: Vec<_> = dashboards_for_vehicle("v1", &links, &types)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["dt2", "dt1"]);
    }

    #[test]
    fn test_vehicle_without_links() {
        let types = [dashboard_type("dt1", "Classic")];
        assert!(dashboards_for_vehicle("v1", &[], &types).is_empty());
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = DashboardSummary::from(&dashboard_type("dt1", "Classic"));
        assert_eq!(
            serde_json::to_value(summary).unwrap(),
            serde_json::json!({ "id": "dt1", "name": "Classic", "imageUrl": null })
        );
    }
}
