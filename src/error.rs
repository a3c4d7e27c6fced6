// Error taxonomy for the configurator
use thiserror::Error;

/// Required configuration is absent or could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// The external store could not deliver a table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request for table {table} failed: {source}")]
    Transport {
        table: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("store returned status {status} for table {table}: {body}")]
    Status {
        table: String,
        status: u16,
        body: String,
    },

    #[error("store repeated pagination offset {offset:?} for table {table}")]
    RepeatedOffset { table: String, offset: String },

    #[error("could not decode response for table {table}: {source}")]
    Decode {
        table: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingErrorKind {
    Missing,
    WrongType { expected: &'static str },
    UnknownCategory(String),
}

/// A raw record did not have the shape its table promises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {record_id}: field {field:?} {}", describe_kind(.kind))]
pub struct MappingError {
    pub record_id: String,
    pub field: &'static str,
    pub kind: MappingErrorKind,
}

impl MappingError {
    pub fn missing(record_id: &str, field: &'static str) -> Self {
        Self {
            record_id: record_id.to_string(),
            field,
            kind: MappingErrorKind::Missing,
        }
    }

    pub fn wrong_type(record_id: &str, field: &'static str, expected: &'static str) -> Self {
        Self {
            record_id: record_id.to_string(),
            field,
            kind: MappingErrorKind::WrongType { expected },
        }
    }

    pub fn unknown_category(record_id: &str, field: &'static str, label: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            field,
            kind: MappingErrorKind::UnknownCategory(label.to_string()),
        }
    }
}

fn describe_kind(kind: &MappingErrorKind) -> String {
    match kind {
        MappingErrorKind::Missing => "is missing".to_string(),
        MappingErrorKind::WrongType { expected } => format!("is not {}", expected),
        MappingErrorKind::UnknownCategory(label) => format!("has unknown category {:?}", label),
    }
}

/// Per-request failures. Configuration problems surface at startup instead.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error(transparent)]
    Upstream(#[from] SourceError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}
