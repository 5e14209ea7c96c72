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
use lightroom::v2::{AlbumPayload, AlbumType, Api, Client, Config};

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The API key is the client id of your Adobe developer console project.
    // The access token is obtained via the Adobe IMS OAuth2 flow.
    let access_token = std::env::var("LIGHTROOM_ACCESS_TOKEN")?;
    let client = Client::from_config(Config::from_env()?)?.with_access_token(&access_token);

    let account = client.account().await?;
    println!("Account: {} <{}>", account.full_name, account.email);

    let catalog = client.catalog().await?;
    println!("Catalog: {} id: {}", catalog.payload.name, catalog.id);

    // Walk all collections, one page at a time
    {
        let albums = client.resources::<AlbumPayload>(client.request(&Api::Albums {
            catalog_id: catalog.id.clone(),
            album_type: Some(AlbumType::Collection),
            limit: Some(50),
        }));
        pin_mut!(albums);
        while let Some(album) = albums.next().await {
            let album = album?;
            println!(
                "Found album: {} id: {} updated: {}",
                album.payload.name, album.id, album.updated
            );
        }
    }

    client.shutdown();
    Ok(())
}
