/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod account;
pub mod album;
pub mod api;
pub mod asset;
pub mod catalog;
pub mod client;
pub mod errors;
pub mod health;
pub mod pagination;
mod parsers;
pub mod properties;
pub mod resource;

pub use account::*;
pub use album::*;
pub use api::*;
pub use asset::*;
pub use catalog::*;
pub use client::*;
pub use errors::*;
pub use health::*;
pub use properties::*;
pub use resource::*;
