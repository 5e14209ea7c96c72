/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These talk to the real service and need LIGHTROOM_API_KEY and LIGHTROOM_ACCESS_TOKEN,
// so they are disabled for ci/cd builds.
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use futures::{StreamExt, pin_mut};
    use lightroom::v2::{AlbumType, Api, AssetPayload, ErrorCode, RenditionType};

    #[ignore]
    #[tokio::test]
    async fn health_account_catalog() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        println!("Health: {:?}", client.health().await.unwrap());
        println!("Account: {:?}", client.account().await.unwrap());
        println!("Catalog: {:?}", client.catalog().await.unwrap());
    }

    #[ignore]
    #[tokio::test]
    async fn invalid_access_token() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        client.set_access_token("not-a-token");
        let err = client.account().await.unwrap_err();
        assert_eq!(err.error_code(), Some(ErrorCode::InvalidAccessToken));
    }

    #[ignore]
    #[tokio::test]
    async fn assets_pages_and_rendition() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let catalog = client.catalog().await.unwrap();

        let first = client.assets(&catalog.id).await.unwrap();
        assert!(first.prev_url().is_none());
        let asset = first.resources.first().unwrap();
        let thumbnail = client
            .asset_rendition(&catalog.id, &asset.id, RenditionType::Thumbnail2x)
            .await
            .unwrap();
        assert!(!thumbnail.bytes().is_empty());

        // Only walk a few pages
        let pages = client.pages::<AssetPayload>(client.request(&Api::Assets {
            catalog_id: catalog.id.clone(),
        }));
        pin_mut!(pages);
        let mut page_count = 0;
        while let Some(page) = pages.next().await {
            let page = page.unwrap();
            if page_count > 0 {
                assert!(page.prev_url().is_some());
            }
            page_count += 1;
            if page_count == 3 {
                break;
            }
        }
        assert!(page_count > 0);
    }

    #[ignore]
    #[tokio::test]
    async fn collection_albums() {
        dotenv().ok();
        let client = helpers::live_client().unwrap();
        let catalog = client.catalog().await.unwrap();
        let albums = client
            .albums(&catalog.id, Some(AlbumType::Collection), Some(5))
            .await
            .unwrap();
        assert!(albums.resources.len() <= 5);
        for album in &albums.resources {
            assert_eq!(album.subtype.as_deref(), Some("collection"));
        }
    }
}
