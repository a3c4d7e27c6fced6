// Airtable catalog source implementation
use crate::application::catalog_source::{CatalogSource, CatalogTable, RawRecord};
use crate::error::{ConfigError, SourceError};
use crate::infrastructure::config::{AirtableSettings, TableNames};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct AirtableSource {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    base_id: String,
    tables: TableNames,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    records: Vec<RawRecord>,
    #[serde(default)]
    offset: Option<String>,
}

impl AirtableSource {
    /// Fails before any request is made when credentials are absent.
    pub fn new(settings: &AirtableSettings) -> Result<Self, ConfigError> {
        let credentials = settings.credentials()?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key,
            base_id: credentials.base_id,
            tables: settings.tables.clone(),
        })
    }

    fn table_url(&self, table_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url,
            self.base_id,
            urlencoding::encode(table_name)
        )
    }

    async fn fetch_page(
        &self,
        table_name: &str,
        offset: Option<&str>,
    ) -> Result<ListResponse, SourceError> {
        let mut request = self
            .client
            .get(self.table_url(table_name))
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json");
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        let response = request.send().await.map_err(|source| SourceError::Transport {
            table: table_name.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                table: table_name.to_string(),
                status,
                body,
            });
        }

        response
            .json::<ListResponse>()
            .await
            .map_err(|source| SourceError::Decode {
                table: table_name.to_string(),
                source,
            })
    }

    /// Read a whole table, following pagination offsets.
    async fn fetch_table(&self, table_name: &str) -> Result<Vec<RawRecord>, SourceError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        let mut pages = 0;

        loop {
            let page = self.fetch_page(table_name, offset.as_deref()).await?;
            pages += 1;
            records.extend(page.records);

            match page.offset {
                Some(next) if offset.as_deref() == Some(next.as_str()) => {
                    return Err(SourceError::RepeatedOffset {
                        table: table_name.to_string(),
                        offset: next,
                    });
                }
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        tracing::debug!(
            "Fetched {} records from table {} in {} page(s)",
            records.len(),
            table_name,
            pages
        );
        Ok(records)
    }
}

#[async_trait]
impl CatalogSource for AirtableSource {
    async fn fetch_records(&self, table: CatalogTable) -> Result<Vec<RawRecord>, SourceError> {
        self.fetch_table(self.tables.name_for(table)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query, State};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type SeenAuth = Arc<Mutex<Vec<String>>>;

    /// Serves three tables: `Paged` over two pages, `Down` always 503,
    /// `Stuck` always answering with the same offset.
    async fn list_records(
        State(seen): State<SeenAuth>,
        Path((_base, table)): Path<(String, String)>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> (StatusCode, Json<Value>) {
        if let Some(auth) = headers.get(header::AUTHORIZATION) {
            seen.lock().unwrap().push(auth.to_str().unwrap().to_string());
        }

        let offset = query.get("offset").map(String::as_str);
        match (table.as_str(), offset) {
            ("Paged", None) => (
                StatusCode::OK,
                Json(json!({ "records": [{ "id": "r1", "fields": { "Naam": "een" } }], "offset": "p2" })),
            ),
            ("Paged", Some("p2")) => (
                StatusCode::OK,
                Json(json!({ "records": [{ "id": "r2", "fields": { "Naam": "twee" } }] })),
            ),
            ("Stuck", _) => (
                StatusCode::OK,
                Json(json!({ "records": [], "offset": "same" })),
            ),
            ("Down", _) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "unavailable" })),
            ),
            _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "NOT_FOUND" }))),
        }
    }

    /// Start a fake store on an ephemeral port and return a source pointed at it.
    async fn fake_store() -> (AirtableSource, SeenAuth) {
        let seen = SeenAuth::default();
        let router = Router::new()
            .route("/:base/:table", get(list_records))
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let settings = AirtableSettings {
            api_url: format!("http://{addr}"),
            ..settings()
        };
        (AirtableSource::new(&settings).unwrap(), seen)
    }

    fn settings() -> AirtableSettings {
        AirtableSettings {
            api_url: "https://api.airtable.com/v0/".to_string(),
            api_key: Some("key123".to_string()),
            base_id: Some("app456".to_string()),
            tables: TableNames::default(),
        }
    }

    #[test]
    fn test_table_url_encodes_name() {
        let source = AirtableSource::new(&settings()).unwrap();
        assert_eq!(
            source.table_url("Auto Dashboards"),
            "https://api.airtable.com/v0/app456/Auto%20Dashboards"
        );
    }

    #[test]
    fn test_requires_credentials() {
        let mut settings = settings();
        settings.api_key = None;
        assert!(matches!(
            AirtableSource::new(&settings),
            Err(ConfigError::Missing("airtable.api_key"))
        ));
    }

    #[test]
    fn test_list_response_decoding() {
        let page: ListResponse = serde_json::from_value(serde_json::json!({
            "records": [
                { "id": "rec1", "createdTime": "2024-01-01T00:00:00.000Z", "fields": { "Naam": "Classic" } },
                { "id": "rec2", "createdTime": "2024-01-01T00:00:00.000Z" }
            ],
            "offset": "itrNext/rec2"
        }))
        .unwrap();

        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].fields["Naam"], "Classic");
        assert!(page.records[1].fields.is_empty());
        assert_eq!(page.offset.as_deref(), Some("itrNext/rec2"));
    }

    #[tokio::test]
    async fn test_pages_are_concatenated_in_order() {
        let (source, seen) = fake_store().await;

        let records = source.fetch_table("Paged").await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(records[1].fields["Naam"], "twee");

        assert_eq!(*seen.lock().unwrap(), vec!["Bearer key123", "Bearer key123"]);
    }

    #[tokio::test]
    async fn test_configured_table_name_is_requested() {
        let (mut source, _) = fake_store().await;
        source.tables.vehicles = "Paged".to_string();

        let records = source.fetch_records(CatalogTable::Vehicles).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (source, _) = fake_store().await;

        let err = source.fetch_table("Down").await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::Status { ref table, status: 503, ref body }
                if table == "Down" && body.contains("unavailable")
        ));
    }

    #[tokio::test]
    async fn test_repeated_offset_stops_paging() {
        let (source, seen) = fake_store().await;

        let err = source.fetch_table("Stuck").await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::RepeatedOffset { ref table, ref offset } if table == "Stuck" && offset == "same"
        ));
        // first page plus the one that echoed the offset back
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
