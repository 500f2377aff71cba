//! Hand-authored descriptors for the conferences this tool knows how to
//! import. Adding a conference means adding data here, not code elsewhere.

use std::collections::HashMap;

use chrono_tz::Tz;

use super::domain::{ConferenceDescriptor, Venue};

/// All known conference descriptors.
pub fn all() -> Vec<ConferenceDescriptor> {
    vec![frenchkit_2022()]
}

/// Look up a descriptor by conference id.
pub fn find(conference_id: &str) -> Option<ConferenceDescriptor> {
    all().into_iter().find(|d| d.conference_id == conference_id)
}

fn frenchkit_2022() -> ConferenceDescriptor {
    let description = HashMap::from([
        (
            "en".to_string(),
            "Located in the center of Nantes, the event takes place in the \"Cité des Congrès\" \
             with more than 3000m² of conference rooms, hand's on and networking space…"
                .to_string(),
        ),
        (
            "fr".to_string(),
            "Située en plein cœur de ville, La Cité des Congrès de Nantes propose pour le DevFest \
             Nantes plus de 3000m² de salles de conférences, codelabs et lieu de rencontre…"
                .to_string(),
        ),
    ]);

    ConferenceDescriptor {
        conference_id: "frenchkit2022".to_string(),
        schedule_url: "https://frenchkit.fr/schedule/schedule-14.json".to_string(),
        speakers_url: "https://frenchkit.fr/speakers/speakers-8.json".to_string(),
        session_language: "en-US".to_string(),
        timezone: Tz::Europe__Paris,
        venues: vec![Venue {
            id: "main".to_string(),
            name: "Cité des Congrès de Nantes".to_string(),
            address: "5 rue de Valmy, 44000 Nantes".to_string(),
            description,
            latitude: 47.21308725112951,
            longitude: -1.542622837466317,
            image_url:
                "https://devfest.gdgnantes.com/static/6328df241501c6e31393e568e5c68d7e/efc43/amphi.webp"
                    .to_string(),
        }],
    }
}
