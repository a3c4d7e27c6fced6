// Infrastructure layer - External dependencies and adapters
pub mod airtable_source;
pub mod catalog_mapper;
pub mod config;
pub mod demo_catalog;
pub mod http_response;
