use std::sync::Arc;

use menuplan_core::application::MenuPlanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenuPlanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenuPlanService) -> Self {
        Self { args, service }
    }
}
