use askama::Template;
use axum::response::Html;

use crate::content::{DIVISIONS, GALLERY};
use crate::error::AppError;

struct DivisionCard {
    slug: &'static str,
    title: &'static str,
    image: &'static str,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    year: i32,
    gallery: Vec<&'static str>,
    divisions: Vec<DivisionCard>,
}

#[derive(Template)]
#[template(path = "pages/privacy.html")]
struct PrivacyTemplate {
    year: i32,
}

#[derive(Template)]
#[template(path = "pages/terms.html")]
struct TermsTemplate {
    year: i32,
}

pub async fn home() -> Result<Html<String>, AppError> {
    let divisions = DIVISIONS
        .iter()
        .enumerate()
        .map(|(i, d)| DivisionCard {
            slug: d.slug,
            title: d.title,
            image: GALLERY[i % GALLERY.len()],
        })
        .collect();

    let template = HomeTemplate {
        year: super::current_year(),
        gallery: GALLERY.to_vec(),
        divisions,
    };
    Ok(Html(template.render()?))
}

pub async fn privacy() -> Result<Html<String>, AppError> {
    let template = PrivacyTemplate {
        year: super::current_year(),
    };
    Ok(Html(template.render()?))
}

pub async fn terms() -> Result<Html<String>, AppError> {
    let template = TermsTemplate {
        year: super::current_year(),
    };
    Ok(Html(template.render()?))
}
