use dicionario_config::Config;

use crate::service::LookupService;

pub struct AppState {
    pub config: Config,
    pub lookup: LookupService,
}

impl AppState {
    pub fn new(config: Config, lookup: LookupService) -> Self {
        Self { config, lookup }
    }
}
