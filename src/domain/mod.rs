// Domain layer - Catalog records and the configurator core
pub mod dashboard;
pub mod lookup;
pub mod quote;
pub mod solution;
pub mod vehicle;
pub mod year_range;
