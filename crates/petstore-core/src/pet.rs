//! # Pet Model
//!
//! The sole domain entity of the petstore sample: a pet with an integer
//! identifier, a name, an availability status, and a set of free-text tags.
//!
//! Filter predicates used by the find endpoints live here too, next to the
//! data they inspect, together with the comma-separated list parsing the
//! query parameters need.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Maximum permitted tag length, in characters.
const MAX_TAG_LEN: usize = 255;

// -- PetId --------------------------------------------------------------------

/// Pet identifier.
///
/// Newtype over `i64` so a pet id cannot be confused with any other integer
/// in the codebase. Serializes as a plain JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct PetId(i64);

impl PetId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PetId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -- PetStatus ----------------------------------------------------------------

/// Pet availability status.
///
/// One of a small enumerated set of values. Serializes as a lowercase
/// string (`"available"`, `"pending"`, `"sold"`) to match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Pet is available for purchase.
    Available,
    /// A purchase is in progress.
    Pending,
    /// Pet has been sold.
    Sold,
}

impl PetStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }

    /// Parse a comma-separated list of status values.
    ///
    /// Values are trimmed; empty segments are skipped, so `"available,"`
    /// parses to a single status. Returns an error on the first segment
    /// that names no known status.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, ValidationError> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::from_str)
            .collect()
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "sold" => Ok(Self::Sold),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

// -- Tag ----------------------------------------------------------------------

/// Free-text tag attached to a pet.
///
/// Serializes/deserializes as a plain string. Validated on construction via
/// [`Tag::new`] to ensure non-empty and within length limits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String)]
pub struct Tag(String);

impl Tag {
    /// Create a validated tag.
    ///
    /// The input is trimmed. Returns an error if the result is empty or
    /// exceeds the maximum tag length.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = s.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        if trimmed.len() > MAX_TAG_LEN {
            return Err(ValidationError::TagTooLong {
                max: MAX_TAG_LEN,
                actual: trimmed.len(),
            });
        }
        Ok(Self(trimmed))
    }

    /// Return the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a comma-separated list of tag values.
    ///
    /// Segments are trimmed; empty segments are skipped. Each remaining
    /// segment is validated via [`Tag::new`].
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, ValidationError> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
            .collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// -- Pet ----------------------------------------------------------------------

/// A pet record.
///
/// Stored wholesale in the repository and replaced wholesale on update —
/// there is no partial-field merge. The only invariant is identifier
/// uniqueness, which the keyed store provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    /// Unique pet identifier.
    pub id: PetId,
    /// Display name of the pet.
    pub name: String,
    /// Availability status.
    pub status: PetStatus,
    /// Free-text tags. Absent in the input means no tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Pet {
    /// Whether this pet's status matches any of the given statuses.
    pub fn status_matches(&self, statuses: &[PetStatus]) -> bool {
        statuses.contains(&self.status)
    }

    /// Whether any of this pet's tags appears in the given tag list.
    pub fn tags_match(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }
}

/// Pet list document.
///
/// Wrapper used when a list of pets must be rendered as a single XML
/// document (`<Pets><pet>…</pet></Pets>`). JSON responses serialize the
/// bare list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pets {
    /// The pets in the document.
    pub pet: Vec<Pet>,
}

impl From<Vec<Pet>> for Pets {
    fn from(pet: Vec<Pet>) -> Self {
        Self { pet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(id: i64, status: PetStatus, tags: &[&str]) -> Pet {
        Pet {
            id: PetId::new(id),
            name: format!("pet-{id}"),
            status,
            tags: tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
        }
    }

    // -- PetStatus ------------------------------------------------------------

    #[test]
    fn status_roundtrips_through_str() {
        for status in [PetStatus::Available, PetStatus::Pending, PetStatus::Sold] {
            assert_eq!(status.as_str().parse::<PetStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        let err = "adopted".parse::<PetStatus>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownStatus("adopted".to_string()));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&PetStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
    }

    #[test]
    fn status_parse_list_handles_multiple_values() {
        let statuses = PetStatus::parse_list("available,pending").unwrap();
        assert_eq!(statuses, vec![PetStatus::Available, PetStatus::Pending]);
    }

    #[test]
    fn status_parse_list_trims_and_skips_empty_segments() {
        let statuses = PetStatus::parse_list(" sold , ,").unwrap();
        assert_eq!(statuses, vec![PetStatus::Sold]);
    }

    #[test]
    fn status_parse_list_propagates_unknown_value() {
        assert!(PetStatus::parse_list("available,bogus").is_err());
    }

    // -- Tag ------------------------------------------------------------------

    #[test]
    fn tag_trims_input() {
        let tag = Tag::new("  friendly  ").unwrap();
        assert_eq!(tag.as_str(), "friendly");
    }

    #[test]
    fn tag_rejects_empty() {
        assert_eq!(Tag::new("   ").unwrap_err(), ValidationError::EmptyTag);
    }

    #[test]
    fn tag_rejects_overlong() {
        let long = "x".repeat(MAX_TAG_LEN + 1);
        assert!(matches!(
            Tag::new(long).unwrap_err(),
            ValidationError::TagTooLong { .. }
        ));
    }

    #[test]
    fn tag_parse_list_validates_each_segment() {
        let tags = Tag::parse_list("tag1, tag2,").unwrap();
        assert_eq!(tags, vec![Tag::new("tag1").unwrap(), Tag::new("tag2").unwrap()]);
    }

    // -- Predicates -----------------------------------------------------------

    #[test]
    fn status_matches_any_of_the_given_values() {
        let p = pet(1, PetStatus::Pending, &[]);
        assert!(p.status_matches(&[PetStatus::Available, PetStatus::Pending]));
        assert!(!p.status_matches(&[PetStatus::Sold]));
        assert!(!p.status_matches(&[]));
    }

    #[test]
    fn tags_match_on_any_overlap() {
        let p = pet(1, PetStatus::Available, &["tag1", "tag2"]);
        assert!(p.tags_match(&[Tag::new("tag2").unwrap(), Tag::new("tag9").unwrap()]));
        assert!(!p.tags_match(&[Tag::new("tag3").unwrap()]));
        assert!(!p.tags_match(&[]));
    }

    // -- Serialization --------------------------------------------------------

    #[test]
    fn pet_json_roundtrip() {
        let p = pet(7, PetStatus::Sold, &["loud"]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn pet_deserializes_without_tags_field() {
        let p: Pet =
            serde_json::from_str(r#"{"id":3,"name":"cat","status":"pending"}"#).unwrap();
        assert_eq!(p.id, PetId::new(3));
        assert!(p.tags.is_empty());
    }
}
