/// A reservable pickleball venue served by the rec.us availability feed.
#[derive(Clone, Debug)]
pub struct Court {
    /// Location identifier used in feed URLs.
    pub slug: &'static str,
    /// Display name; becomes the opaque `court_id` on fetched slots.
    pub name: &'static str,
}

/// The San Francisco venues with a structured availability feed.
/// Goldman Tennis Center runs on a separate reservation system with no stable
/// feed and is handled by the AI-assisted extraction collaborator, not here.
pub fn all_courts() -> Vec<Court> {
    vec![
        Court { slug: "buenavista", name: "Buena Vista" },
        Court { slug: "jackson", name: "Jackson" },
        Court { slug: "moscone", name: "Moscone" },
        Court { slug: "parkside", name: "Parkside Square" },
        Court { slug: "presidiowall", name: "Presidio Wall" },
        Court { slug: "richmond", name: "Richmond" },
        Court { slug: "rossi", name: "Rossi" },
        Court { slug: "sterngrove", name: "Stern Grove" },
        Court { slug: "uppernoe", name: "Upper Noe" },
    ]
}
