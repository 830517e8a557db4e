pub mod form;
pub mod payload;
pub mod transport;

use serde::{Deserialize, Serialize};

/// A prospective applicant's "Get Scouted" submission.
///
/// Field names are the wire format of `POST /api/get-scouted`. Missing keys
/// deserialize as empty strings; the server does not re-validate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSubmission {
    pub name: String,
    pub email: String,
    pub country: String,
    pub discipline: String,
    pub links: String,
    pub statement: String,
}

impl ApplicationSubmission {
    /// True when name, email, country and discipline are all non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.country.is_empty()
            && !self.discipline.is_empty()
    }
}

/// Acknowledgment body returned by the submission endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Models,
    ArtistsMusicians,
    Photographers,
    Videographers,
    Creators,
    Performers,
}

impl Discipline {
    pub const ALL: [Discipline; 6] = [
        Discipline::Models,
        Discipline::ArtistsMusicians,
        Discipline::Photographers,
        Discipline::Videographers,
        Discipline::Creators,
        Discipline::Performers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Models => "Models",
            Discipline::ArtistsMusicians => "Artists & Musicians",
            Discipline::Photographers => "Photographers",
            Discipline::Videographers => "Videographers",
            Discipline::Creators => "Creators",
            Discipline::Performers => "Performers",
        }
    }

    /// Slug of the talent division page for this discipline.
    pub fn division_slug(&self) -> &'static str {
        match self {
            Discipline::Models => "models",
            Discipline::ArtistsMusicians => "artists-musicians",
            Discipline::Photographers => "photographers",
            Discipline::Videographers => "videographers",
            Discipline::Creators => "creators",
            Discipline::Performers => "performers",
        }
    }
}
