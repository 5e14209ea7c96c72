/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Datetime in RFC-3339 format with a mandatory `Z` suffix, e.g. `2016-01-15T09:23:34Z`.
///
/// The raw server value is kept as is since the API documentation (and some responses)
/// carry placeholder values. Use [`UtcDateTime::to_datetime`] to get a parsed value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UtcDateTime(String);

impl UtcDateTime {
    pub fn new(raw_value: impl Into<String>) -> Self {
        Self(raw_value.into())
    }

    pub fn raw_value(&self) -> &str {
        &self.0
    }

    /// Parses the raw value, returning `None` when it is not a valid RFC-3339 datetime
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .ok()
            .map(|v| v.with_timezone(&Utc))
    }
}

impl std::fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Size in bytes
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct FileSize(pub u64);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Sha256(pub String);

/// Renditions that can be requested for an asset.
///
/// The numeric variants are the length of the long edge in pixels.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
pub enum RenditionType {
    #[serde(rename = "thumbnail2x")]
    #[strum(serialize = "thumbnail2x")]
    Thumbnail2x,
    #[serde(rename = "640")]
    #[strum(serialize = "640")]
    LongEdge640,
    #[serde(rename = "1280")]
    #[strum(serialize = "1280")]
    LongEdge1280,
    #[serde(rename = "2048")]
    #[strum(serialize = "2048")]
    LongEdge2048,
}

/// Album subtypes, also used as the `subtype` filter when listing albums
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumType {
    Project,
    ProjectSet,
    Collection,
    CollectionSet,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AssetSortOrder {
    CaptureDateAsc,
    CaptureDateDesc,
    ImportTimestampAsc,
    ImportTimestampDesc,
    FileNameAsc,
    FileNameDesc,
    RatingAsc,
    RatingDesc,
    UserUpdatedAsc,
    UserUpdatedDesc,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntitlementStatus {
    Created,
    Trial,
    TrialExpired,
    Subscriber,
    SubscriberExpired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rendition_type_strings() {
        assert_eq!(RenditionType::Thumbnail2x.to_string(), "thumbnail2x");
        assert_eq!(RenditionType::LongEdge640.to_string(), "640");
        assert_eq!(RenditionType::LongEdge1280.to_string(), "1280");
        assert_eq!(RenditionType::LongEdge2048.to_string(), "2048");
        assert_eq!(
            RenditionType::from_str("2048").unwrap(),
            RenditionType::LongEdge2048
        );
        assert_eq!(
            RenditionType::from_str("4096"),
            Err(strum::ParseError::VariantNotFound)
        );
    }

    #[test]
    fn album_type_strings() {
        assert_eq!(AlbumType::Project.to_string(), "project");
        assert_eq!(AlbumType::ProjectSet.to_string(), "project_set");
        assert_eq!(AlbumType::Collection.to_string(), "collection");
        assert_eq!(AlbumType::CollectionSet.to_string(), "collection_set");
        let v: AlbumType = serde_json::from_str("\"collection_set\"").unwrap();
        assert_eq!(v, AlbumType::CollectionSet);
    }

    #[test]
    fn utc_datetime_keeps_raw_value() {
        let valid = UtcDateTime::new("2016-01-15T09:23:34Z");
        assert!(valid.to_datetime().is_some());

        let placeholder: UtcDateTime = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(placeholder.raw_value(), "string");
        assert!(placeholder.to_datetime().is_none());
    }

    #[test]
    fn entitlement_status_from_wire() {
        let v: EntitlementStatus = serde_json::from_str("\"trial_expired\"").unwrap();
        assert_eq!(v, EntitlementStatus::TrialExpired);
    }
}
