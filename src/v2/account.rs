/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::LightroomError;
use crate::v2::{Api, Client, EntitlementStatus, FileSize, ResourceId, UtcDateTime};
use serde::Deserialize;
use std::collections::HashMap;

pub type AccountId = ResourceId<Account>;

/// An account is associated with each Adobe customer and holds the personal information and
/// subscription status.
///
/// See [Lightroom API Docs](https://developer.adobe.com/lightroom/lightroom-api-docs/api/#tag/Accounts)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct Account {
    pub base: String,

    pub id: AccountId,

    pub created: UtcDateTime,

    pub updated: UtcDateTime,

    #[serde(rename = "type")]
    pub account_type: String,

    pub email: String,

    pub full_name: String,

    pub first_name: String,

    pub last_name: String,

    pub country: String,

    pub entitlement: Entitlement,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Entitlement {
    pub status: EntitlementStatus,

    #[serde(default)]
    pub trial: Option<Trial>,

    #[serde(default, rename = "current_subs")]
    pub subscription: Option<Subscription>,

    #[serde(default)]
    pub storage: Option<Storage>,

    #[serde(default)]
    pub deletion_date: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Trial {
    pub start: UtcDateTime,
    pub end: UtcDateTime,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Subscription {
    pub product_id: String,

    pub store: String,

    pub purchase_date: UtcDateTime,

    #[serde(default)]
    pub sao: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Storage {
    /// Bytes used by content counting against the limit.
    pub used: FileSize,

    /// Value of `used` at which clients should start warning the user.
    #[serde(default)]
    pub warn: Option<FileSize>,

    /// Enforced storage limit, always greater or equal to `display_limit`.
    pub limit: FileSize,

    pub display_limit: FileSize,
}

impl Client {
    /// Retrieves the account metadata of the user the access token belongs to
    pub async fn account(&self) -> Result<Account, LightroomError> {
        self.execute_json(&self.request(&Api::Account)).await
    }
}
