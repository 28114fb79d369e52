//! Student submission page route handler.

use askama::Template;
use askama_web::WebTemplate;

/// Student submission form template.
#[derive(Template, WebTemplate)]
#[template(path = "student.html")]
pub struct StudentTemplate;

/// Display the student submission form.
pub async fn student() -> StudentTemplate {
    StudentTemplate
}
