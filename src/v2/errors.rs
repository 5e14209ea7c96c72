/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::parsers::from_uint_or_numeric_str;
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Field name to the list of messages the API reported for it
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum LightroomError {
    #[error("No access token set")]
    NoAccessToken,

    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Request network error")]
    Execute(#[source] reqwest::Error),

    #[error("Response has no body")]
    NoBody,

    #[error("API Response was error: {code}, description: {description}")]
    Response {
        code: u64,
        description: String,
        errors: Option<FieldErrors>,
    },

    #[error("Deserialization error")]
    Decoding(#[source] serde_json::Error),

    #[error("Failed creating HTTP client")]
    Transport(#[source] reqwest::Error),
}

impl LightroomError {
    /// Returns the known API error code if this is a [`LightroomError::Response`]
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            LightroomError::Response { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }
}

/// Reasons a [`crate::v2::Request`] could not be turned into an HTTP request
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("URL Parse error")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

/// Error codes seen in API error responses.
///
/// These are the service codes, not HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u64)]
pub enum ErrorCode {
    ResourceNotFound = 1000,
    InvalidAccessToken = 4002,
    InvalidApiKey = 403003,
}

// Body returned by the API on failing requests
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorResponse {
    #[serde(deserialize_with = "from_uint_or_numeric_str")]
    pub(crate) code: u64,

    pub(crate) description: String,

    #[serde(default)]
    pub(crate) errors: Option<FieldErrors>,
}

impl From<ErrorResponse> for LightroomError {
    fn from(v: ErrorResponse) -> Self {
        LightroomError::Response {
            code: v.code,
            description: v.description,
            errors: v.errors,
        }
    }
}
