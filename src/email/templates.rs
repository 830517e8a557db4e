use askama::Template;

use crate::application::ApplicationSubmission;

/// Notification body for a new application. Values are HTML-escaped.
#[derive(Template)]
#[template(path = "email/application.html")]
struct ApplicationNotification<'a> {
    submission: &'a ApplicationSubmission,
}

pub fn render_application(submission: &ApplicationSubmission) -> Result<String, askama::Error> {
    ApplicationNotification { submission }.render()
}
