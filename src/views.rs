use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tera::Tera;
use thiserror::Error;
use tracing::error;

pub const HOME: &str = "home.html";
pub const SIGNUP: &str = "signup.html";
pub const LOGIN: &str = "login.html";
pub const ACCESS: &str = "access.html";

#[derive(Debug, Error)]
#[error("render {template}")]
pub struct ViewError {
    template: &'static str,
    #[source]
    source: tera::Error,
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        error!(error = ?self, "template render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Compiled page templates, shared by all requests.
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    /// Load every `*.html` under `dir`. Fails if any template does not parse or a
    /// page is missing.
    pub fn load(dir: &str) -> anyhow::Result<Self> {
        let tera = Tera::new(&format!("{}/**/*.html", dir.trim_end_matches('/')))?;
        for page in [HOME, SIGNUP, LOGIN, ACCESS] {
            if !tera.get_template_names().any(|n| n == page) {
                anyhow::bail!("template {page} not found in {dir}");
            }
        }
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, template: &'static str) -> Result<Html<String>, ViewError> {
        self.tera
            .render(template, &tera::Context::new())
            .map(Html)
            .map_err(|source| ViewError { template, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

    #[test]
    fn loads_and_renders_every_page() {
        let views = Views::load(TEMPLATES).expect("templates load");
        for page in [HOME, SIGNUP, LOGIN, ACCESS] {
            let Html(body) = views.render(page).expect("render");
            assert!(body.contains("<html"), "{page} is not a full document");
        }
    }

    #[test]
    fn forms_post_email_and_password() {
        let views = Views::load(TEMPLATES).expect("templates load");
        for (page, action) in [(SIGNUP, "/signup"), (LOGIN, "/login")] {
            let Html(body) = views.render(page).expect("render");
            assert!(body.contains(&format!(r#"action="{action}""#)));
            assert!(body.contains(r#"name="email""#));
            assert!(body.contains(r#"name="password""#));
        }
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(Views::load("/definitely/not/here").is_err());
    }
}
