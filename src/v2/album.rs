/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::LightroomError;
use crate::v2::{
    AlbumType, Api, AssetRef, CatalogId, Client, Link, RenditionType, Request, Resource,
    ResourceId, ResourceRef, Resources, UtcDateTime,
};
use serde::Deserialize;

pub type Album = Resource<AlbumPayload>;
pub type Albums = Resources<AlbumPayload>;
pub type AlbumRef = ResourceRef<AlbumPayload>;
pub type AlbumId = ResourceId<AlbumPayload>;
pub type AlbumAsset = Resource<AlbumAssetPayload>;
pub type AlbumAssets = Resources<AlbumAssetPayload>;

/// Holds the album specific fields.
///
/// See [Lightroom API Docs](https://developer.adobe.com/lightroom/lightroom-api-docs/api/#tag/Albums)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPayload {
    pub user_created: UtcDateTime,

    pub user_updated: UtcDateTime,

    pub name: String,

    #[serde(default)]
    pub cover: Option<AssetRef>,

    #[serde(default)]
    pub parent: Option<AlbumRef>,
}

/// Fields of the association between an album and one of its assets
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlbumAssetPayload {
    #[serde(default)]
    pub user_created: Option<UtcDateTime>,

    #[serde(default)]
    pub user_updated: Option<UtcDateTime>,
}

impl AlbumAsset {
    /// Link to the asset this entry refers to
    pub fn asset_link(&self) -> Option<&Link> {
        self.asset.as_ref()?.links.as_ref()?.get("self")
    }

    /// Absolute url of the asset this entry refers to
    pub fn asset_url(&self) -> Option<String> {
        let base = self.base.as_ref()?;
        let link = self.asset_link()?;
        Some(format!("{}{}", base, link.href))
    }

    /// Absolute url of a rendition of the asset this entry refers to
    pub fn asset_rendition_url(&self, rendition_type: RenditionType) -> Option<String> {
        self.asset_url()
            .map(|url| format!("{url}/renditions/{rendition_type}"))
    }

    pub fn asset_rendition_request(&self, rendition_type: RenditionType) -> Option<Request> {
        self.asset_rendition_url(rendition_type).map(Request::get)
    }
}

impl Client {
    /// Retrieves the first page of albums in the catalog.
    ///
    /// `album_type` restricts the result to one subtype and `limit` caps the page size.
    pub async fn albums(
        &self,
        catalog_id: &CatalogId,
        album_type: Option<AlbumType>,
        limit: Option<u32>,
    ) -> Result<Albums, LightroomError> {
        let api = Api::Albums {
            catalog_id: catalog_id.clone(),
            album_type,
            limit,
        };
        self.execute_json(&self.request(&api)).await
    }

    pub async fn album(
        &self,
        catalog_id: &CatalogId,
        album_id: &AlbumId,
    ) -> Result<Album, LightroomError> {
        let api = Api::Album {
            catalog_id: catalog_id.clone(),
            album_id: album_id.clone(),
        };
        self.execute_json(&self.request(&api)).await
    }

    /// Retrieves the first page of assets in an album
    pub async fn album_assets(
        &self,
        catalog_id: &CatalogId,
        album_id: &AlbumId,
        limit: Option<u32>,
    ) -> Result<AlbumAssets, LightroomError> {
        let api = Api::AlbumAssets {
            catalog_id: catalog_id.clone(),
            album_id: album_id.clone(),
            limit,
        };
        self.execute_json(&self.request(&api)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn album_asset(asset: serde_json::Value) -> AlbumAssets {
        serde_json::from_value(json!({
            "base": "https://lr.adobe.io/v2/catalogs/c1/",
            "resources": [{
                "id": "aa1",
                "type": "album_asset",
                "created": "2020-01-01T00:00:00Z",
                "updated": "2020-01-01T00:00:00Z",
                "asset": asset,
                "payload": {}
            }]
        }))
        .unwrap()
    }

    #[test]
    fn asset_urls_from_self_link() {
        let page = album_asset(json!({
            "id": "a1",
            "links": { "self": { "href": "assets/a1" } }
        }));
        let entry = &page.resources[0];
        assert_eq!(entry.asset_link().unwrap().href, "assets/a1");
        assert_eq!(
            entry.asset_url().as_deref(),
            Some("https://lr.adobe.io/v2/catalogs/c1/assets/a1")
        );
        assert_eq!(
            entry.asset_rendition_url(RenditionType::LongEdge640).as_deref(),
            Some("https://lr.adobe.io/v2/catalogs/c1/assets/a1/renditions/640")
        );
        assert_eq!(
            entry
                .asset_rendition_request(RenditionType::Thumbnail2x)
                .unwrap()
                .url,
            "https://lr.adobe.io/v2/catalogs/c1/assets/a1/renditions/thumbnail2x"
        );
    }

    #[test]
    fn asset_urls_without_links() {
        let page = album_asset(json!({ "id": "a1" }));
        let entry = &page.resources[0];
        assert!(entry.asset_link().is_none());
        assert!(entry.asset_url().is_none());
        assert!(entry.asset_rendition_url(RenditionType::LongEdge2048).is_none());
    }
}
