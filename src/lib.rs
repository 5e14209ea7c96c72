/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Lightroom
//!
//! This library was created for reading from the Adobe Lightroom APIv2 interface.
//!
//! For further details on the Rest API refer to the
//! [Lightroom API Docs](https://developer.adobe.com/lightroom/lightroom-api-docs/api/)
//!
//! ## Features
//!
//! - Health check
//! - Account information (Read only)
//! - Catalog information
//! - Assets
//!     - List the assets of a catalog, page by page or as a stream
//!     - Download asset renditions
//! - Albums
//!     - List albums, optionally by subtype
//!     - List the assets contained in an Album
//! - Lower level interface for handling the raw communication
//!
//! *Requests are authorized with an API key and an OAuth2 access token. Getting the access
//! token is left up to the consumer of this library*
//!
//! *If you want to use this library for more than is currently implemented,
//! [`v2::Client::execute`] and [`v2::Client::execute_json`] make requests in a more direct way.
//! Some endpoints put a 12 byte preamble in front of JSON bodies, which is removed unless
//! disabled with [`v2::ExecuteOptions`]*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! lightroom = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key from the Adobe Developer Console prior to using the API**
//!
//! ```rust,no_run
//! use futures::{pin_mut, StreamExt};
//! use lightroom::v2::{AlbumPayload, Api, Client, LightroomError};
//!
//! async fn print_albums(api_key: &str, access_token: &str) -> Result<(), LightroomError> {
//!     // The API key is obtained from the Adobe Developer Console.
//!     // The access token is obtained via an OAuth2 process external to this library.
//!     let client = Client::new(api_key)?.with_access_token(access_token);
//!
//!     // Get the catalog of the authenticated user
//!     let catalog = client.catalog().await?;
//!
//!     // Walk over all albums, following the "next" links
//!     let first = client.request(&Api::Albums {
//!         catalog_id: catalog.id.clone(),
//!         album_type: None,
//!         limit: Some(50),
//!     });
//!     let albums = client.resources::<AlbumPayload>(first);
//!     pin_mut!(albums);
//!     while let Some(album) = albums.next().await {
//!         let album = album?;
//!         println!("{}: {}", album.id, album.payload.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v2;
