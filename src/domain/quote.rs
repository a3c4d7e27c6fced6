// Priced options and quote aggregation
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Catalog groups shown by the wizard. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Headunit,
    Interface,
    Camera,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Headunit,
        Category::Interface,
        Category::Camera,
        Category::Accessory,
    ];

    /// Parse a store label, ignoring case and separators ("Head unit", "head-unit").
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Headunit => "Headunit",
            Category::Interface => "Interface",
            Category::Camera => "Camera",
            Category::Accessory => "Accessory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedOption {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Informational only, not enforced when quoting
    #[serde(default)]
    pub compatible_models: Vec<String>,
}

/// What the user picked in the wizard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub selections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    #[serde(flatten)]
    pub option: PricedOption,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub total: f64,
    pub items: Vec<QuoteLine>,
}

/// Price the selected options.
///
/// Matching walks the catalog, not the selection: lines follow catalog order,
/// repeated ids count once and unknown ids are ignored.
pub fn compute_quote(catalog: &[PricedOption], selection: &Selection) -> Quote {
    let selected: HashSet<&str> = selection.selections.iter().map(String::as_str).collect();

    let items: Vec<QuoteLine> = catalog
        .iter()
        .filter(|option| selected.contains(option.id.as_str()))
        .map(|option| QuoteLine {
            option: option.clone(),
            quantity: 1,
        })
        .collect();

    let total = items
        .iter()
        .fold(0.0, |sum, line| sum + line.option.price * f64::from(line.quantity));

    Quote { total, items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, price: f64) -> PricedOption {
        PricedOption {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: Category::Accessory,
            price,
            description: None,
            image_url: None,
            compatible_models: Vec::new(),
        }
    }

    fn select(ids: &[&str]) -> Selection {
        Selection {
            model: None,
            selections: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn test_duplicates_and_unknown_ids() {
        let catalog = [option("a", 100.0), option("b", 50.0)];
        let quote = compute_quote(&catalog, &select(&["a", "a", "c"]));

        assert_eq!(quote.total, 100.0);
        assert_eq!(
            quote.items,
            vec![QuoteLine {
                option: option("a", 100.0),
                quantity: 1,
            }]
        );
    }

    #[test]
    fn test_empty_selection() {
        let catalog = [option("a", 100.0)];
        let quote = compute_quote(&catalog, &Selection::default());

        assert_eq!(quote.total, 0.0);
        assert!(quote.total.is_sign_positive());
        assert!(quote.items.is_empty());
    }

    #[test]
    fn test_lines_follow_catalog_order() {
        let catalog = [option("a", 1.5), option("b", 2.25), option("c", 4.0)];
        let quote = compute_quote(&catalog, &select(&["c", "a"]));

        let ids: Vec<_> = quote.items.iter().map(|l| l.option.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(quote.total, 1.5 + 4.0);
    }

    #[test]
    fn test_total_is_plain_float_sum() {
        let catalog = [option("a", 0.1), option("b", 0.2)];
        let quote = compute_quote(&catalog, &select(&["a", "b"]));
        assert_eq!(quote.total, 0.0 + 0.1 + 0.2);
    }

    #[test]
    fn test_quote_line_flattens_option() {
        let line = QuoteLine {
            option: option("a", 100.0),
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_value(line).unwrap(),
            serde_json::json!({
                "id": "a",
                "name": "A",
                "category": "Accessory",
                "price": 100.0,
                "description": null,
                "imageUrl": null,
                "compatibleModels": [],
                "quantity": 1
            })
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from_label("Headunit"), Some(Category::Headunit));
        assert_eq!(Category::from_label("Head unit"), Some(Category::Headunit));
        assert_eq!(Category::from_label("head-unit"), Some(Category::Headunit));
        assert_eq!(Category::from_label("CAMERA"), Some(Category::Camera));
        assert_eq!(Category::from_label("Speaker"), None);
        assert_eq!(Category::Interface.to_string(), "Interface");
    }

    #[test]
    fn test_selection_defaults() {
        let selection: Selection = serde_json::from_str(r#"{"model":"v1"}"#).unwrap();
        assert_eq!(selection.model.as_deref(), Some("v1"));
        assert!(selection.selections.is_empty());
    }
}
