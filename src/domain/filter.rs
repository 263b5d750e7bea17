//! Search criteria applied to the character list.
//!
//! A [`FilterSet`] is an immutable value. Every edit goes through one of the
//! `with_*` builders, which return a new set; the state machine compares old
//! and new sets to decide whether a refetch (and a reset to page 1) is due.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status filter values accepted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    Alive,
    Dead,
    Unknown,
}

impl StatusFilter {
    /// Lowercase wire value.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }

    /// Next value in the `All -> Alive -> Dead -> Unknown -> All` cycle.
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Alive),
            Some(Self::Alive) => Some(Self::Dead),
            Some(Self::Dead) => Some(Self::Unknown),
            Some(Self::Unknown) => None,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alive" => Ok(Self::Alive),
            "dead" => Ok(Self::Dead),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown status filter: {other}")),
        }
    }
}

/// Free-text filter fields, in the order the filter bar shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Species,
    Type,
    Gender,
}

impl TextField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Species, Self::Type, Self::Gender];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Species => "Species",
            Self::Type => "Type",
            Self::Gender => "Gender",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Species,
            Self::Species => Self::Type,
            Self::Type => Self::Gender,
            Self::Gender => Self::Name,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Gender,
            Self::Species => Self::Name,
            Self::Type => Self::Species,
            Self::Gender => Self::Type,
        }
    }
}

/// The combined set of optional search criteria.
///
/// Empty strings are allowed in any text field and mean "no filter"; the
/// query builder drops them.
///
/// # Examples
///
/// ```
/// use character_catalog::domain::{FilterSet, StatusFilter};
///
/// let filters = FilterSet::default()
///     .with_name("rick")
///     .with_status(Some(StatusFilter::Alive));
/// assert_eq!(filters.name, "rick");
/// assert!(!filters.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    pub name: String,
    pub status: Option<StatusFilter>,
    pub species: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub gender: Option<String>,
}

impl FilterSet {
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    #[must_use]
    pub fn with_status(self, status: Option<StatusFilter>) -> Self {
        Self { status, ..self }
    }

    #[must_use]
    pub fn with_species(self, species: impl Into<String>) -> Self {
        Self { species: Some(species.into()), ..self }
    }

    #[must_use]
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self { kind: Some(kind.into()), ..self }
    }

    #[must_use]
    pub fn with_gender(self, gender: impl Into<String>) -> Self {
        Self { gender: Some(gender.into()), ..self }
    }

    /// Current text of a free-text field (empty when unset).
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Species => self.species.as_deref().unwrap_or_default(),
            TextField::Type => self.kind.as_deref().unwrap_or_default(),
            TextField::Gender => self.gender.as_deref().unwrap_or_default(),
        }
    }

    /// Returns a copy with one free-text field replaced.
    #[must_use]
    pub fn with_text(self, field: TextField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            TextField::Name => self.with_name(value),
            TextField::Species => self.with_species(value),
            TextField::Type => self.with_kind(value),
            TextField::Gender => self.with_gender(value),
        }
    }

    /// True when no field would contribute a query parameter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && TextField::ALL.iter().all(|f| self.text(*f).is_empty())
    }

    /// Equality as seen by the server: unset and empty text are the same,
    /// and gender is compared lowercased as it is sent.
    #[must_use]
    pub fn same_query(&self, other: &Self) -> bool {
        self.status == other.status
            && TextField::ALL.iter().all(|f| match f {
                TextField::Gender => self.text(*f).to_lowercase() == other.text(*f).to_lowercase(),
                _ => self.text(*f) == other.text(*f),
            })
    }
}
