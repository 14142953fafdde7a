use std::sync::Arc;

use crate::services::TemplateService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateService>,
}
