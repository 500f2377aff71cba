use serde::{Deserialize, Serialize};

/// A room derived from the schedule. The normalized room identifier doubles
/// as the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

impl Room {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            id: identifier.clone(),
            name: identifier,
        }
    }
}
