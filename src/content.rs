//! Static copy for the talent division pages.

pub struct Division {
    pub slug: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub images: &'static [&'static str],
}

pub const GALLERY: [&str; 6] = [
    "/images/01.png",
    "/images/02.png",
    "/images/03.png",
    "/images/04.png",
    "/images/05.png",
    "/images/06.png",
];

pub static DIVISIONS: [Division; 6] = [
    Division {
        slug: "models",
        title: "Models",
        paragraphs: &[
            "We work with models who demonstrate presence, discipline, and long-term potential beyond surface visibility.",
            "Development may include portfolio direction, industry readiness, and strategic positioning within global markets.",
        ],
        images: &["/images/01.png", "/images/02.png", "/images/03.png"],
    },
    Division {
        slug: "artists-musicians",
        title: "Artists & Musicians",
        paragraphs: &[
            "We work with artists who are ready for structure, refinement, and long-term direction.",
            "Development may include positioning, creative clarity, and professional readiness.",
        ],
        images: &["/images/04.png", "/images/05.png", "/images/06.png"],
    },
    Division {
        slug: "photographers",
        title: "Photographers",
        paragraphs: &[
            "We work with photographers who demonstrate vision, consistency, and an editorial standard.",
            "Development may include portfolio direction, industry positioning, and brand alignment.",
        ],
        images: &["/images/02.png", "/images/03.png", "/images/04.png"],
    },
    Division {
        slug: "videographers",
        title: "Videographers",
        paragraphs: &[
            "We work with videographers who understand pacing, story, and visual discipline.",
            "Development may include reel curation, client alignment, and strategic positioning.",
        ],
        images: &["/images/03.png", "/images/04.png", "/images/05.png"],
    },
    Division {
        slug: "creators",
        title: "Creators",
        paragraphs: &[
            "We work with creators who are building something intentional, not viral.",
            "Development may include positioning, clarity, and long-term strategy.",
        ],
        images: &["/images/04.png", "/images/01.png", "/images/06.png"],
    },
    Division {
        slug: "performers",
        title: "Performers",
        paragraphs: &[
            "We work with performers who demonstrate presence, discipline, and professional readiness.",
            "Development may include strategy, positioning, and access when alignment exists.",
        ],
        images: &["/images/06.png", "/images/05.png", "/images/01.png"],
    },
];

/// Shown for slugs that have no division of their own.
pub static FALLBACK_DIVISION: Division = Division {
    slug: "",
    title: "Talent Division",
    paragraphs: &["This division will be populated with editorial examples and development direction."],
    images: &["/images/01.png"],
};

pub fn find_division(slug: &str) -> Option<&'static Division> {
    DIVISIONS.iter().find(|d| d.slug == slug)
}
