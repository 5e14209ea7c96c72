/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::{AlbumId, AlbumType, AssetId, CatalogId, RenditionType};

// Root Lightroom API
pub const BASE_URL: &str = "https://lr.adobe.io/v2/";

/// HTTP methods used by the API. Only reads are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
}

impl From<Method> for reqwest::Method {
    fn from(v: Method) -> Self {
        match v {
            Method::Get => reqwest::Method::GET,
        }
    }
}

/// The operations available on the Lightroom API.
///
/// See [Lightroom API Docs](https://developer.adobe.com/lightroom/lightroom-api-docs/api/) for
/// details on the individual endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Api {
    /// Lightroom Services health check.
    Health,

    /// Retrieve the user account metadata.
    Account,

    /// Retrieve the user catalog metadata.
    Catalog,

    /// Retrieve a list of existing assets that caller owns.
    Assets { catalog_id: CatalogId },

    /// Get a catalog asset.
    Asset {
        catalog_id: CatalogId,
        asset_id: AssetId,
    },

    /// Get latest asset rendition.
    AssetRendition {
        catalog_id: CatalogId,
        asset_id: AssetId,
        rendition_type: RenditionType,
    },

    /// Retrieve albums, optionally filtered by subtype.
    Albums {
        catalog_id: CatalogId,
        album_type: Option<AlbumType>,
        limit: Option<u32>,
    },

    /// Get album.
    Album {
        catalog_id: CatalogId,
        album_id: AlbumId,
    },

    /// List assets of an album.
    AlbumAssets {
        catalog_id: CatalogId,
        album_id: AlbumId,
        limit: Option<u32>,
    },
}

impl Api {
    pub fn method(&self) -> Method {
        Method::Get
    }

    /// Path relative to the versioned base url, including the query string if any
    pub fn path(&self) -> String {
        match self {
            Api::Health => "health".to_string(),
            Api::Account => "account".to_string(),
            Api::Catalog => "catalog".to_string(),
            Api::Assets { catalog_id } => format!("catalogs/{catalog_id}/assets"),
            Api::Asset {
                catalog_id,
                asset_id,
            } => format!("catalogs/{catalog_id}/assets/{asset_id}"),
            Api::AssetRendition {
                catalog_id,
                asset_id,
                rendition_type,
            } => format!("catalogs/{catalog_id}/assets/{asset_id}/renditions/{rendition_type}"),
            Api::Albums {
                catalog_id,
                album_type,
                limit,
            } => {
                let album_type = album_type.map(|v| v.to_string());
                let limit = limit.map(|v| v.to_string());
                let params = vec![("subtype", album_type), ("limit", limit)];
                format!("catalogs/{catalog_id}/albums{}", query_string(&params))
            }
            Api::Album {
                catalog_id,
                album_id,
            } => format!("catalogs/{catalog_id}/albums/{album_id}"),
            Api::AlbumAssets {
                catalog_id,
                album_id,
                limit,
            } => {
                let params = vec![("limit", limit.map(|v| v.to_string()))];
                format!(
                    "catalogs/{catalog_id}/albums/{album_id}/assets{}",
                    query_string(&params)
                )
            }
        }
    }

    /// Absolute url of this operation on the public API
    pub fn url(&self) -> String {
        self.url_with_base(BASE_URL)
    }

    /// Absolute url of this operation relative to `base`, which is expected to end with `/`
    pub fn url_with_base(&self, base: &str) -> String {
        format!("{base}{}", self.path())
    }
}

// Optional query parameters, absent ones are left out of the query string
type ApiParams<'a> = [(&'a str, Option<String>)];

// Builds "?name=value&..." from the present parameters or "" when none are present
fn query_string(params: &ApiParams<'_>) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", name, urlencoding::encode(v)))
        })
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_id() -> CatalogId {
        CatalogId::new("bf7337d9355c41b7875c9392f918362a")
    }

    #[test]
    fn fixed_urls() {
        assert_eq!(Api::Health.url(), "https://lr.adobe.io/v2/health");
        assert_eq!(Api::Account.url(), "https://lr.adobe.io/v2/account");
        assert_eq!(Api::Catalog.url(), "https://lr.adobe.io/v2/catalog");
        assert_eq!(Api::Catalog.method(), Method::Get);
    }

    #[test]
    fn asset_urls() {
        let asset_id = AssetId::new("a1");
        assert_eq!(
            Api::Assets {
                catalog_id: catalog_id()
            }
            .url(),
            format!("{BASE_URL}catalogs/{}/assets", catalog_id())
        );
        assert_eq!(
            Api::Asset {
                catalog_id: catalog_id(),
                asset_id: asset_id.clone()
            }
            .url(),
            format!("{BASE_URL}catalogs/{}/assets/a1", catalog_id())
        );

        for rendition_type in [
            RenditionType::Thumbnail2x,
            RenditionType::LongEdge640,
            RenditionType::LongEdge1280,
            RenditionType::LongEdge2048,
        ] {
            let op = Api::AssetRendition {
                catalog_id: catalog_id(),
                asset_id: asset_id.clone(),
                rendition_type,
            };
            assert_eq!(
                op.url(),
                format!(
                    "{BASE_URL}catalogs/{}/assets/a1/renditions/{rendition_type}",
                    catalog_id()
                )
            );
        }
    }

    #[test]
    fn albums_without_params() {
        let op = Api::Albums {
            catalog_id: catalog_id(),
            album_type: None,
            limit: None,
        };
        assert_eq!(op.url(), format!("{BASE_URL}catalogs/{}/albums", catalog_id()));
    }

    #[test]
    fn albums_with_single_param() {
        let op = Api::Albums {
            catalog_id: catalog_id(),
            album_type: None,
            limit: Some(17),
        };
        assert_eq!(
            op.url(),
            format!("{BASE_URL}catalogs/{}/albums?limit=17", catalog_id())
        );

        for album_type in [AlbumType::Collection, AlbumType::CollectionSet] {
            let op = Api::Albums {
                catalog_id: catalog_id(),
                album_type: Some(album_type),
                limit: None,
            };
            assert_eq!(
                op.url(),
                format!("{BASE_URL}catalogs/{}/albums?subtype={album_type}", catalog_id())
            );
        }
    }

    #[test]
    fn albums_with_both_params() {
        let op = Api::Albums {
            catalog_id: catalog_id(),
            album_type: Some(AlbumType::Collection),
            limit: Some(5),
        };
        let url = url::Url::parse(&op.url()).unwrap();
        assert_eq!(url.host_str(), Some("lr.adobe.io"));
        assert_eq!(url.path(), format!("/v2/catalogs/{}/albums", catalog_id()));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 2);
        let subtypes: Vec<_> = pairs.iter().filter(|(k, _)| k == "subtype").collect();
        assert_eq!(subtypes.len(), 1);
        assert_eq!(subtypes[0].1, "collection");
        let limits: Vec<_> = pairs.iter().filter(|(k, _)| k == "limit").collect();
        assert_eq!(limits.len(), 1);
        assert_eq!(limits[0].1, "5");
    }

    #[test]
    fn album_urls() {
        let album_id = AlbumId::new("al1");
        assert_eq!(
            Api::Album {
                catalog_id: catalog_id(),
                album_id: album_id.clone()
            }
            .url(),
            format!("{BASE_URL}catalogs/{}/albums/al1", catalog_id())
        );
        assert_eq!(
            Api::AlbumAssets {
                catalog_id: catalog_id(),
                album_id: album_id.clone(),
                limit: None
            }
            .url(),
            format!("{BASE_URL}catalogs/{}/albums/al1/assets", catalog_id())
        );
        assert_eq!(
            Api::AlbumAssets {
                catalog_id: catalog_id(),
                album_id,
                limit: Some(42)
            }
            .url(),
            format!("{BASE_URL}catalogs/{}/albums/al1/assets?limit=42", catalog_id())
        );
    }

    #[test]
    fn custom_base() {
        assert_eq!(
            Api::Health.url_with_base("http://127.0.0.1:8080/v2/"),
            "http://127.0.0.1:8080/v2/health"
        );
    }

    #[test]
    fn empty_query_string() {
        assert_eq!(query_string(&[("limit", None), ("subtype", None)]), "");
        assert_eq!(
            query_string(&[("a", Some("x y".to_string())), ("b", None)]),
            "?a=x%20y"
        );
    }
}
