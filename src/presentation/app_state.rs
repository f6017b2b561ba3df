// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::idea_service::IdeaService;

#[derive(Clone)]
pub struct AppState {
    pub chart_service: ChartService,
    pub idea_service: IdeaService,
}
