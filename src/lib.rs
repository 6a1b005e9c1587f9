use serde::{Deserialize, Serialize};

pub mod coauthors;
pub mod report;
pub mod scholar;

/// An author profile as returned by the profile service.
///
/// `publications` is empty until the profile is hydrated with the
/// "publications" section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

/// A publication record.
///
/// `authors` holds the raw "A and B and C" author string and is absent
/// until the record is hydrated with the "authors" section. `year` may be
/// missing for publications the service has no date for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
}
