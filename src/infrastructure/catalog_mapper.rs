// Mapper to convert raw store records to domain records
use crate::application::catalog_source::RawRecord;
use crate::domain::dashboard::{DashboardType, VehicleDashboardLink};
use crate::domain::quote::{Category, PricedOption};
use crate::domain::solution::Solution;
use crate::domain::vehicle::Vehicle;
use crate::error::MappingError;
use serde_json::Value;

pub fn map_records<T>(
    records: &[RawRecord],
    map: fn(&RawRecord) -> Result<T, MappingError>,
) -> Result<Vec<T>, MappingError> {
    records.iter().map(map).collect()
}

pub fn map_vehicle(record: &RawRecord) -> Result<Vehicle, MappingError> {
    let fields = Fields(record);
    Ok(Vehicle {
        id: record.id.clone(),
        brand: fields.required_str("Merk")?,
        model: fields.required_str("Model")?,
        generation: fields.optional_str("Generatie / Type")?,
        year_from: fields.optional_year("Jaar van")?,
        year_to: fields.optional_year("Jaar tot")?,
    })
}

pub fn map_link(record: &RawRecord) -> Result<VehicleDashboardLink, MappingError> {
    let fields = Fields(record);
    Ok(VehicleDashboardLink {
        id: record.id.clone(),
        vehicle_id: fields.first_link("Auto")?,
        dashboard_type_id: fields.first_link("DashboardType")?,
    })
}

pub fn map_dashboard_type(record: &RawRecord) -> Result<DashboardType, MappingError> {
    let fields = Fields(record);
    Ok(DashboardType {
        id: record.id.clone(),
        name: fields.required_str("Naam")?,
        image_url: fields.first_attachment_url("Herkenningsfoto")?,
    })
}

pub fn map_solution(record: &RawRecord) -> Result<Solution, MappingError> {
    let fields = Fields(record);
    Ok(Solution {
        id: record.id.clone(),
        link_id: fields.first_link("AutoDashboard")?,
        kind: fields.required_str("OplossingType")?,
        price: fields.required_number("Prijs")?,
        image_url: fields.first_attachment_url("ProductFoto")?,
        description: fields.optional_str("Omschrijving")?,
    })
}

pub fn map_priced_option(record: &RawRecord) -> Result<PricedOption, MappingError> {
    let fields = Fields(record);
    let label = fields.required_str("Category")?;
    let category = Category::from_label(&label)
        .ok_or_else(|| MappingError::unknown_category(&record.id, "Category", &label))?;

    Ok(PricedOption {
        id: record.id.clone(),
        name: fields.required_str("Name")?,
        category,
        price: fields.required_number("Price")?,
        description: fields.optional_str("Description")?,
        image_url: fields.image("ImageUrl")?,
        compatible_models: fields.string_list("CompatibleModels")?,
    })
}

/// Typed accessors over a record's fields. `null` counts as absent.
struct Fields<'a>(&'a RawRecord);

impl Fields<'_> {
    fn get(&self, field: &'static str) -> Option<&Value> {
        self.0.fields.get(field).filter(|value| !value.is_null())
    }

    fn missing(&self, field: &'static str) -> MappingError {
        MappingError::missing(&self.0.id, field)
    }

    fn wrong_type(&self, field: &'static str, expected: &'static str) -> MappingError {
        MappingError::wrong_type(&self.0.id, field, expected)
    }

    fn required_str(&self, field: &'static str) -> Result<String, MappingError> {
        self.optional_str(field)?.ok_or_else(|| self.missing(field))
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<String>, MappingError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.wrong_type(field, "a string")),
        }
    }

    fn required_number(&self, field: &'static str) -> Result<f64, MappingError> {
        match self.get(field) {
            None => Err(self.missing(field)),
            Some(value) => value.as_f64().ok_or_else(|| self.wrong_type(field, "a number")),
        }
    }

    fn optional_year(&self, field: &'static str) -> Result<Option<i32>, MappingError> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };

        let year = match value.as_i64() {
            Some(year) => Some(year),
            // the store may send whole numbers as floats
            None => value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64),
        };

        year.and_then(|year| i32::try_from(year).ok())
            .map(Some)
            .ok_or_else(|| self.wrong_type(field, "an integer year"))
    }

    /// First id of a linked-record list
    fn first_link(&self, field: &'static str) -> Result<Option<String>, MappingError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Array(ids)) => match ids.first() {
                None => Ok(None),
                Some(Value::String(id)) => Ok(Some(id.clone())),
                Some(_) => Err(self.wrong_type(field, "a list of record ids")),
            },
            Some(_) => Err(self.wrong_type(field, "a list of record ids")),
        }
    }

    /// URL of the first attachment in an attachment list
    fn first_attachment_url(&self, field: &'static str) -> Result<Option<String>, MappingError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Array(attachments)) => match attachments.first() {
                None => Ok(None),
                Some(attachment) => attachment
                    .get("url")
                    .and_then(Value::as_str)
                    .map(|url| Some(url.to_string()))
                    .ok_or_else(|| self.wrong_type(field, "a list of attachments")),
            },
            Some(_) => Err(self.wrong_type(field, "a list of attachments")),
        }
    }

    /// Either a plain URL or an attachment list
    fn image(&self, field: &'static str) -> Result<Option<String>, MappingError> {
        match self.get(field) {
            Some(Value::String(url)) => Ok(Some(url.clone())),
            _ => self.first_attachment_url(field),
        }
    }

    fn string_list(&self, field: &'static str) -> Result<Vec<String>, MappingError> {
        match self.get(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.wrong_type(field, "a list of strings"))
                })
                .collect(),
            Some(_) => Err(self.wrong_type(field, "a list of strings")),
        }
    }
}
