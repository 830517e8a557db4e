use super::transport::SubmitTransport;
use super::{ApplicationSubmission, Discipline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Country,
    Discipline,
    Links,
    Statement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form not valid, or a submission already in flight. Nothing was sent.
    Blocked,
    Succeeded,
    Failed,
}

/// State behind the "Get Scouted" application form.
///
/// Fields are only editable once both consents are given. A successful
/// submission clears the form; a failed one leaves it as it was so the
/// applicant can retry.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    accepted: bool,
    confirm: bool,
    fields: ApplicationSubmission,
    loading: bool,
    success: bool,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disciplines() -> &'static [Discipline] {
        &Discipline::ALL
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn confirm(&self) -> bool {
        self.confirm
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn fields(&self) -> &ApplicationSubmission {
        &self.fields
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Country => &self.fields.country,
            FormField::Discipline => &self.fields.discipline,
            FormField::Links => &self.fields.links,
            FormField::Statement => &self.fields.statement,
        }
    }

    /// Policy acceptance consent.
    pub fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }

    /// No-guarantee acknowledgment.
    pub fn set_confirm(&mut self, confirm: bool) {
        self.confirm = confirm;
    }

    pub fn is_form_enabled(&self) -> bool {
        self.accepted && self.confirm
    }

    pub fn is_form_valid(&self) -> bool {
        self.is_form_enabled() && self.fields.has_required_fields()
    }

    /// Update a field. Ignored (returns `false`) while the consent gate is closed.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if !self.is_form_enabled() {
            return false;
        }

        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Country => &mut self.fields.country,
            FormField::Discipline => &mut self.fields.discipline,
            FormField::Links => &mut self.fields.links,
            FormField::Statement => &mut self.fields.statement,
        };
        *slot = value.into();
        true
    }

    /// Send the current fields through `transport`, exactly once.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: SubmitTransport + ?Sized,
    {
        // `&mut self` already rules out overlapping calls; the flag mirrors
        // the disabled submit button for renderers.
        if !self.is_form_valid() || self.loading {
            return SubmitOutcome::Blocked;
        }

        self.loading = true;
        self.success = false;

        let payload = self.fields.clone();
        let result = {
            let _in_flight = InFlight(&mut self.loading);
            transport.submit(&payload).await
        };

        match result {
            Ok(true) => {
                self.success = true;
                self.fields = ApplicationSubmission::default();
                self.accepted = false;
                self.confirm = false;
                SubmitOutcome::Succeeded
            }
            Ok(false) => SubmitOutcome::Failed,
            Err(e) => {
                tracing::warn!("Application submission failed: {e}");
                SubmitOutcome::Failed
            }
        }
    }
}

/// Clears the loading flag when the request finishes or its future is dropped.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
