use std::path::PathBuf;

use minijinja::{Environment, context, path_loader};

use crate::errors::AppError;
use crate::slugify;

/// Service owning the template environment and the filters exposed to it
pub struct TemplateService {
    env: Environment<'static>,
}

impl TemplateService {
    /// Create a new template service loading templates from the given directory
    pub fn new(template_dir: PathBuf) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir));
        // Explicit registration keeps the filter wiring visible in one place
        env.add_filter("slug", |value: String| slugify::slug(&value));
        Self { env }
    }

    /// Render a named template. The pages served here are static documents,
    /// so no request-dependent values enter the context.
    pub fn render(&self, name: &str) -> Result<String, AppError> {
        let template = self.env.get_template(name)?;
        let html = template.render(context! {})?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateService;
    use crate::errors::AppError;
    use std::path::PathBuf;

    fn service() -> TemplateService {
        TemplateService::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
    }

    #[test]
    fn renders_usage_page_with_slug_anchors() {
        let html = service().render("usage.html").unwrap();
        assert!(html.contains("id=\"getting-started\""));
        assert!(html.contains("href=\"#getting-started\""));
        assert!(html.contains("id=\"anchors-links\""));
    }

    #[test]
    fn missing_template_is_reported_as_not_found() {
        let err = service().render("missing.html").unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound(_)), "got {err:?}");
    }
}
