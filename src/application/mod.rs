// Application layer - Use cases over the catalog
pub mod catalog_source;
pub mod configurator_service;
