/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate lightroom;

use anyhow::Result;
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use lightroom::v2::{AlbumAssetPayload, AlbumType, Api, Client, Config, LightroomError, RenditionType};
use std::path::Path;

// Stop after this many thumbnails
const MAX_DOWNLOADS: usize = 10;

// Downloads the thumbnails of the assets in the first collection found into `out_dir`.
// NOTE: the authenticated user should have at least one collection with assets.
async fn download_first_album_thumbnails(client: &Client, out_dir: &Path) -> Result<usize> {
    let catalog = client.catalog().await?;

    let albums = client
        .albums(&catalog.id, Some(AlbumType::Collection), Some(1))
        .await?;
    let Some(album) = albums.resources.first() else {
        println!("No collections found");
        return Ok(0);
    };
    println!("Using album: {}", album.payload.name);

    let album_assets = client.resources::<AlbumAssetPayload>(client.request(&Api::AlbumAssets {
        catalog_id: catalog.id.clone(),
        album_id: album.id.clone(),
        limit: None,
    }));

    let mut downloaded = 0;
    pin_mut!(album_assets);
    while let Some(album_asset) = album_assets.next().await {
        let album_asset = album_asset?;
        let Some(request) = album_asset.asset_rendition_request(RenditionType::Thumbnail2x) else {
            continue;
        };

        match client.execute(&request).await {
            Ok(resp) => {
                let path = out_dir.join(format!("{}.jpg", album_asset.id));
                std::fs::write(&path, resp.bytes())?;
                println!("Downloaded {} bytes to {}", resp.bytes().len(), path.display());
                downloaded += 1;
            }
            // Renditions are generated lazily and may not exist yet
            Err(err @ LightroomError::Response { .. }) => {
                println!("Skipping {}: {}", album_asset.id, err);
            }
            Err(err) => return Err(err.into()),
        }

        if downloaded == MAX_DOWNLOADS {
            break;
        }
    }

    Ok(downloaded)
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let access_token = std::env::var("LIGHTROOM_ACCESS_TOKEN")?;
    let client = Client::from_config(Config::from_env()?)?.with_access_token(&access_token);

    let out_dir = std::env::temp_dir().join("lightroom-thumbnails");
    std::fs::create_dir_all(&out_dir)?;

    let count = download_first_album_thumbnails(&client, &out_dir).await?;
    println!("Downloaded {} thumbnails into {}", count, out_dir.display());
    Ok(())
}
