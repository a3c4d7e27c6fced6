// Application state for HTTP handlers
use crate::application::configurator_service::ConfiguratorService;

#[derive(Clone)]
pub struct AppState {
    pub configurator_service: ConfiguratorService,
}
