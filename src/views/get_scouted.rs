use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::application::form::{ApplicationForm, FormField, SubmitOutcome};
use crate::dispatch::DispatcherTransport;
use crate::error::AppError;
use crate::state::SharedState;

struct DisciplineOption {
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "pages/get_scouted.html")]
struct GetScoutedTemplate {
    year: i32,
    accepted: bool,
    confirm: bool,
    enabled: bool,
    valid: bool,
    loading: bool,
    success: bool,
    name: String,
    email: String,
    country: String,
    links: String,
    statement: String,
    disciplines: Vec<DisciplineOption>,
}

impl GetScoutedTemplate {
    fn from_form(form: &ApplicationForm) -> Self {
        let fields = form.fields();
        let disciplines = ApplicationForm::disciplines()
            .iter()
            .map(|d| DisciplineOption {
                label: d.label(),
                selected: fields.discipline == d.label(),
            })
            .collect();

        Self {
            year: super::current_year(),
            accepted: form.accepted(),
            confirm: form.confirm(),
            enabled: form.is_form_enabled(),
            valid: form.is_form_valid(),
            loading: form.is_loading(),
            success: form.is_success(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            country: fields.country.clone(),
            links: fields.links.clone(),
            statement: fields.statement.clone(),
            disciplines,
        }
    }
}

/// Browser post of the application page. Checkboxes arrive only when checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationFormInput {
    pub accepted: Option<String>,
    pub confirm: Option<String>,
    pub name: String,
    pub email: String,
    pub country: String,
    pub discipline: String,
    pub links: String,
    pub statement: String,
}

impl ApplicationFormInput {
    /// Consents first, then fields, so edits made behind a closed gate are dropped.
    fn apply(self, form: &mut ApplicationForm) {
        form.set_accepted(self.accepted.is_some());
        form.set_confirm(self.confirm.is_some());

        for (field, value) in [
            (FormField::Name, self.name),
            (FormField::Email, self.email),
            (FormField::Country, self.country),
            (FormField::Discipline, self.discipline),
            (FormField::Links, self.links),
            (FormField::Statement, self.statement),
        ] {
            form.set_field(field, value);
        }
    }
}

pub async fn page() -> Result<Html<String>, AppError> {
    let form = ApplicationForm::new();
    Ok(Html(GetScoutedTemplate::from_form(&form).render()?))
}

pub async fn submit(
    State(state): State<SharedState>,
    Form(input): Form<ApplicationFormInput>,
) -> Result<Html<String>, AppError> {
    let mut form = ApplicationForm::new();
    input.apply(&mut form);

    let transport = DispatcherTransport::new(&state.dispatcher);
    match form.submit(&transport).await {
        SubmitOutcome::Succeeded => tracing::info!("Application received via form"),
        SubmitOutcome::Blocked => tracing::debug!("Incomplete application form ignored"),
        SubmitOutcome::Failed => {}
    }

    Ok(Html(GetScoutedTemplate::from_form(&form).render()?))
}
