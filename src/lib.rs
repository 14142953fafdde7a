//! Folio - a single-page usage site with slug anchors
//!
//! This crate serves one server-rendered usage document and exposes a `slug`
//! template filter so section anchors can be derived from heading text
//! instead of hand-maintained ids.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod slugify;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use errors::AppError;
pub use services::TemplateService;
pub use slugify::slug;
pub use types::AppState;
