//! Character domain model.
//!
//! [`CharacterSummary`] is what one row of the catalog shows. It is decoded
//! from the API's character object but keeps its own field names; the wire
//! shape lives in [`crate::api::response`].

use serde::{Deserialize, Serialize};

/// A named reference to a place (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    /// API endpoint of the location. Empty for "unknown" places.
    #[serde(default)]
    pub url: String,
}

/// Life status as reported by the server.
///
/// The server sends `"Alive"`, `"Dead"` or `"unknown"`. Anything else is kept
/// as [`LifeStatus::Unknown`] for coloring while the raw text stays on
/// [`CharacterSummary::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStatus {
    Alive,
    Dead,
    Unknown,
}

impl LifeStatus {
    /// Classifies a raw status string, ignoring case.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }
}

/// One character as shown in the catalog.
///
/// # Fields
///
/// - `id`: Server-assigned identifier, unique and stable
/// - `status`: Raw status text (`Alive`, `Dead`, `unknown`)
/// - `image_url`: Avatar location, resolved by the image loader collaborator
/// - `kind`: Subtype, serialized as `type`; may be empty
/// - `gender`: May be empty
/// - `episode_urls`: Episode endpoints in airing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub image_url: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub episode_urls: Vec<String>,
}

impl CharacterSummary {
    #[must_use]
    pub fn life_status(&self) -> LifeStatus {
        LifeStatus::classify(&self.status)
    }

    /// Number of episodes the character appears in.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.episode_urls.len()
    }
}
