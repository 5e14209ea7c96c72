/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::LightroomError;
use crate::v2::{Api, AssetSortOrder, Client, Resource, ResourceId, UtcDateTime};
use serde::Deserialize;
use std::collections::HashMap;

/// A catalog is the topmost container of resources for a user. Each catalog holds zero or
/// more assets, albums or other resources.
pub type Catalog = Resource<CatalogPayload>;
pub type CatalogId = ResourceId<CatalogPayload>;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    #[serde(default)]
    pub user_created: Option<UtcDateTime>,

    #[serde(default)]
    pub user_updated: Option<UtcDateTime>,

    pub name: String,

    #[serde(default)]
    pub asset_sort_order: Option<AssetSortOrder>,

    #[serde(default)]
    pub presets: Option<HashMap<String, HashMap<String, bool>>>,

    #[serde(default)]
    pub profiles: Option<HashMap<String, HashMap<String, bool>>>,

    // Not modeled yet
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

impl Client {
    /// Retrieves the catalog of the user the access token belongs to
    pub async fn catalog(&self) -> Result<Catalog, LightroomError> {
        self.execute_json(&self.request(&Api::Catalog)).await
    }
}
