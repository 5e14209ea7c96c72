/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::LightroomError;
use crate::v2::{Api, Client};
use serde::Deserialize;

/// Holds information returned from the health check.
#[derive(Deserialize, Debug, Clone)]
pub struct Health {
    pub version: String,
}

impl Client {
    /// Lightroom Services health check
    pub async fn health(&self) -> Result<Health, LightroomError> {
        self.execute_json(&self.request(&Api::Health)).await
    }
}
