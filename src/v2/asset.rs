/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::LightroomError;
use crate::v2::{
    AccountId, Api, CatalogId, Client, FileSize, RenditionType, Request, Resource, ResourceId,
    ResourceRef, Resources, Response, Sha256, UtcDateTime,
};
use serde::Deserialize;
use std::collections::HashMap;

pub type Asset = Resource<AssetPayload>;
pub type Assets = Resources<AssetPayload>;
pub type AssetRef = ResourceRef<AssetPayload>;
pub type AssetId = ResourceId<AssetPayload>;

/// Type specific fields of an asset.
///
/// See [Lightroom API Docs](https://developer.adobe.com/lightroom/lightroom-api-docs/api/#tag/Assets)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetPayload {
    pub capture_date: UtcDateTime,

    pub import_source: ImportSource,

    // Not modeled yet
    #[serde(default)]
    pub video: Option<serde_json::Value>,

    #[serde(default)]
    pub user_created: Option<UtcDateTime>,

    #[serde(default)]
    pub user_updated: Option<UtcDateTime>,

    #[serde(default)]
    pub xmp: Option<Xmp>,

    #[serde(default)]
    pub location: Option<Location>,
}

impl AssetPayload {
    /// Keywords assigned to the asset, sorted
    pub fn keywords(&self) -> Option<Vec<String>> {
        let subject = &self.xmp.as_ref()?.dc.as_ref()?.subject;
        let mut keywords: Vec<String> = subject
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(k, _)| k.clone())
            .collect();
        keywords.sort();
        Some(keywords)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImportSource {
    pub file_name: String,
    pub file_size: FileSize,
    pub original_width: u32,
    pub original_height: u32,
    pub sha256: Sha256,
    pub imported_on_device: String,
    pub imported_by: AccountId,
    pub import_timestamp: UtcDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,

    #[serde(default)]
    pub altitude: Option<f64>,

    #[serde(default)]
    pub direction: Option<f64>,

    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub iso_country_code: Option<String>,
}

/// XMP metadata, see [IPTC Photo Metadata](https://www.iptc.org/std/photometadata/specification/IPTC-PhotoMetadata)
#[derive(Deserialize, Debug, Clone)]
pub struct Xmp {
    // Not modeled yet
    #[serde(default)]
    pub exif: Option<serde_json::Value>,

    #[serde(default)]
    pub dc: Option<DublinCore>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DublinCore {
    /// Keyword to whether it is set
    #[serde(default)]
    pub subject: HashMap<String, bool>,
}

impl Client {
    /// Retrieves the first page of assets in the catalog.
    ///
    /// Use [`Resources::next_request`] or [`Client::pages`] for the following pages.
    pub async fn assets(&self, catalog_id: &CatalogId) -> Result<Assets, LightroomError> {
        let api = Api::Assets {
            catalog_id: catalog_id.clone(),
        };
        self.execute_json(&self.request(&api)).await
    }

    pub async fn asset(
        &self,
        catalog_id: &CatalogId,
        asset_id: &AssetId,
    ) -> Result<Asset, LightroomError> {
        let api = Api::Asset {
            catalog_id: catalog_id.clone(),
            asset_id: asset_id.clone(),
        };
        self.execute_json(&self.request(&api)).await
    }

    /// Downloads the latest rendition of an asset, the body is the image data
    pub async fn asset_rendition(
        &self,
        catalog_id: &CatalogId,
        asset_id: &AssetId,
        rendition_type: RenditionType,
    ) -> Result<Response, LightroomError> {
        self.execute(&self.asset_rendition_request(catalog_id, asset_id, rendition_type))
            .await
    }

    /// Request for an asset rendition, e.g. to be executed later or elsewhere
    pub fn asset_rendition_request(
        &self,
        catalog_id: &CatalogId,
        asset_id: &AssetId,
        rendition_type: RenditionType,
    ) -> Request {
        self.request(&Api::AssetRendition {
            catalog_id: catalog_id.clone(),
            asset_id: asset_id.clone(),
            rendition_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(xmp: serde_json::Value) -> AssetPayload {
        serde_json::from_value(json!({
            "captureDate": "2020-06-01T10:00:00Z",
            "importSource": {
                "fileName": "IMG_0001.JPG",
                "fileSize": 123456,
                "originalWidth": 4000,
                "originalHeight": 3000,
                "sha256": "abc",
                "importedOnDevice": "device",
                "importedBy": "96e656e3812b4c2fb670fa74b6a7ad74",
                "importTimestamp": "2020-06-02T10:00:00Z"
            },
            "xmp": xmp
        }))
        .unwrap()
    }

    #[test]
    fn keywords_only_enabled_subjects() {
        let p = payload(json!({ "dc": { "subject": { "sea": true, "sky": false, "beach": true } } }));
        assert_eq!(p.keywords().unwrap(), vec!["beach", "sea"]);
        assert_eq!(p.import_source.file_size, FileSize(123456));
        assert_eq!(
            p.import_source.imported_by.raw_value(),
            "96e656e3812b4c2fb670fa74b6a7ad74"
        );
    }

    #[test]
    fn keywords_without_dc() {
        assert!(payload(json!({})).keywords().is_none());
    }
}
