use askama::Template;
use axum::extract::Path;
use axum::response::Html;

use crate::content::{self, FALLBACK_DIVISION};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "pages/division.html")]
struct DivisionTemplate {
    year: i32,
    title: &'static str,
    paragraphs: Vec<&'static str>,
    images: Vec<&'static str>,
}

/// Unknown divisions render a generic placeholder rather than a 404.
pub async fn show(Path(slug): Path<String>) -> Result<Html<String>, AppError> {
    let division = content::find_division(&slug).unwrap_or_else(|| {
        tracing::debug!("No division for slug {slug}, using placeholder");
        &FALLBACK_DIVISION
    });

    let template = DivisionTemplate {
        year: super::current_year(),
        title: division.title,
        paragraphs: division.paragraphs.to_vec(),
        images: division.images.to_vec(),
    };
    Ok(Html(template.render()?))
}
