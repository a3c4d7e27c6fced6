// Installation kits attached to a vehicle/dashboard link
use crate::domain::dashboard::VehicleDashboardLink;
use crate::domain::lookup::{find_first, Lookup};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: String,
    pub link_id: Option<String>,
    pub kind: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl From<&Solution> for SolutionSummary {
    fn from(solution: &Solution) -> Self {
        Self {
            id: solution.id.clone(),
            kind: solution.kind.clone(),
            price: solution.price,
            image_url: solution.image_url.clone(),
            description: solution.description.clone(),
        }
    }
}

/// The link joining a vehicle to a dashboard type. First match wins on duplicates.
pub fn find_link<'a>(
    vehicle_id: &str,
    dashboard_type_id: &str,
    links: &'a [VehicleDashboardLink],
) -> Lookup<'a, VehicleDashboardLink> {
    find_first(links, |link| {
        link.joins(vehicle_id) && link.dashboard_type_id.as_deref() == Some(dashboard_type_id)
    })
}

/// Solutions sold for a vehicle with a given dashboard type, in source order.
pub fn solutions_for(
    vehicle_id: &str,
    dashboard_type_id: &str,
    links: &[VehicleDashboardLink],
    solutions: &[Solution],
) -> Vec<SolutionSummary> {
    let link = match find_link(vehicle_id, dashboard_type_id, links) {
        Lookup::Found(link) => link,
        Lookup::NotFound => return Vec::new(),
    };

    solutions
        .iter()
        .filter(|solution| solution.link_id.as_deref() == Some(link.id.as_str()))
        .map(SolutionSummary::from)
        .collect()
}
