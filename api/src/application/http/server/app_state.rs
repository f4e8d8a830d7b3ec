use std::sync::Arc;

use rasoi_core::application::RasoiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RasoiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RasoiService) -> Self {
        Self { args, service }
    }
}
