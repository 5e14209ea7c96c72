/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::{AssetPayload, UtcDateTime};
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Relation name to link, e.g. `self`, `prev`, `next`
pub type Links = HashMap<String, Link>;

/// A link relative to the `base` of the response it was returned in.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,

    #[serde(default)]
    pub templated: Option<bool>,
}

/// Identifier of a resource whose payload is `P`.
///
/// The payload type only tags the id so that e.g. an album id cannot be passed where an
/// asset id is expected.
pub struct ResourceId<P> {
    raw_value: String,
    _payload: PhantomData<fn() -> P>,
}

impl<P> ResourceId<P> {
    pub fn new(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            _payload: PhantomData,
        }
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }
}

impl<P> Clone for ResourceId<P> {
    fn clone(&self) -> Self {
        Self::new(self.raw_value.clone())
    }
}

impl<P> PartialEq for ResourceId<P> {
    fn eq(&self, other: &Self) -> bool {
        self.raw_value == other.raw_value
    }
}
impl<P> Eq for ResourceId<P> {}

impl<P> Hash for ResourceId<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_value.hash(state);
    }
}

impl<P> fmt::Debug for ResourceId<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceId").field(&self.raw_value).finish()
    }
}

impl<P> fmt::Display for ResourceId<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_value)
    }
}

impl<'de, P> Deserialize<'de> for ResourceId<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Identifier of one revision of a resource
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RevisionId(pub String);

/// A single resource returned by the API.
///
/// The fields common to all resources are decoded by the envelope, the type specific fields
/// are held in `payload`.
#[derive(Debug, Clone)]
pub struct Resource<P> {
    /// Base url used to resolve the `links`. Set from the enclosing [`Resources`] when part
    /// of a collection.
    pub base: Option<String>,
    pub id: ResourceId<P>,
    pub resource_type: String,
    pub subtype: Option<String>,
    pub created: UtcDateTime,
    pub updated: UtcDateTime,
    pub revision_ids: Option<Vec<RevisionId>>,
    pub links: Option<Links>,

    /// Set when the resource is an association to an asset, e.g. an album asset
    pub asset: Option<ResourceRef<AssetPayload>>,
    pub payload: P,
}

impl<P> Resource<P> {
    /// Resolves the link with the given relation against `base`
    pub fn link_url(&self, rel: &str) -> Option<String> {
        let base = self.base.as_ref()?;
        let link = self.links.as_ref()?.get(rel)?;
        Some(format!("{}{}", base, link.href))
    }
}

// Envelope fields, the payload is kept undecoded for the second pass
#[derive(Deserialize)]
struct ResourceFields {
    #[serde(default)]
    base: Option<String>,

    id: String,

    #[serde(rename = "type")]
    resource_type: String,

    #[serde(default)]
    subtype: Option<String>,

    created: UtcDateTime,

    updated: UtcDateTime,

    #[serde(default)]
    revision_ids: Option<Vec<RevisionId>>,

    #[serde(default)]
    links: Option<Links>,

    #[serde(default)]
    asset: Option<ResourceRef<AssetPayload>>,

    payload: serde_json::Value,
}

impl<'de, P> Deserialize<'de> for Resource<P>
where
    P: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = ResourceFields::deserialize(deserializer)?;
        let payload = P::deserialize(fields.payload)
            .map_err(|e| D::Error::custom(format!("payload: {e}")))?;
        Ok(Self {
            base: fields.base,
            id: ResourceId::new(fields.id),
            resource_type: fields.resource_type,
            subtype: fields.subtype,
            created: fields.created,
            updated: fields.updated,
            revision_ids: fields.revision_ids,
            links: fields.links,
            asset: fields.asset,
            payload,
        })
    }
}

/// Reference to another resource, e.g. the cover of an album
#[derive(Deserialize, Debug, Clone)]
#[serde(bound(deserialize = ""))]
pub struct ResourceRef<P> {
    pub id: ResourceId<P>,

    #[serde(default)]
    pub links: Option<Links>,
}

/// One page of a collection of resources.
///
/// See [`crate::v2::pagination`] for walking the pages.
#[derive(Debug, Clone)]
pub struct Resources<P> {
    pub base: String,
    pub resources: Vec<Resource<P>>,
    pub links: Option<Links>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "P: DeserializeOwned"))]
struct ResourcesFields<P> {
    base: String,
    resources: Vec<Resource<P>>,
    #[serde(default)]
    links: Option<Links>,
}

impl<'de, P> Deserialize<'de> for Resources<P>
where
    P: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = ResourcesFields::<P>::deserialize(deserializer)?;
        let base = fields.base;
        let resources = fields
            .resources
            .into_iter()
            .map(|mut v| {
                v.base = Some(base.clone());
                v
            })
            .collect();
        Ok(Self {
            base,
            resources,
            links: fields.links,
        })
    }
}
