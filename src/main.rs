use std::sync::Arc;

use tokio::net::TcpListener;

use folio::logger::Logger;
use folio::{AppError, AppState, Config, TemplateService, handlers};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    if let Err(err) = Logger::init() {
        eprintln!("Failed to install logger: {err}");
    }

    let config = Config::new();
    if !config.template_dir.exists() {
        return Err(AppError::TemplateNotFound(format!(
            "template directory {:?} does not exist",
            config.template_dir
        )));
    }

    let state = AppState {
        templates: Arc::new(TemplateService::new(config.template_dir.clone())),
    };
    let app = handlers::router(state);

    let addr = config.socket_addr();
    log::info!("Usage page listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(AppError::from)
}
