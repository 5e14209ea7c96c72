/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::errors::{ErrorResponse, LightroomError, RequestError};
use crate::v2::{Api, BASE_URL, Method};
use bytes::Bytes;
use log::{debug, trace, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

// Number of non JSON bytes the API puts in front of JSON bodies.
// see https://developer.adobe.com/lightroom/lightroom-api-docs/guides/calling_api/
const JSON_PREAMBLE_LEN: usize = 12;

const JSON_CONTENT_TYPE: &str = "application/json";

const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable holding the API key used by [`Config::from_env`]
pub const API_KEY_ENV: &str = "LIGHTROOM_API_KEY";

/// Environment variable overriding the base url used by [`Config::from_env`]
pub const BASE_URL_ENV: &str = "LIGHTROOM_BASE_URL";

/// Client configuration
#[derive(Clone)]
pub struct Config {
    pub api_key: String,

    /// Versioned base url the [`Api`] operations are resolved against. Must end with `/`.
    pub base_url: String,

    pub user_agent: String,

    /// Overall timeout of a single call. Left to the HTTP client defaults when `None`.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.into(),
            user_agent: concat!("lightroom-rs/", env!("CARGO_PKG_VERSION")).into(),
            timeout: None,
        }
    }

    /// Reads the configuration from `LIGHTROOM_API_KEY` and the optional `LIGHTROOM_BASE_URL`
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let config = Self::new(&std::env::var(API_KEY_ENV)?);
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(base_url) => config.with_base_url(&base_url),
            Err(_) => config,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"xxx")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A request to be executed by the [`Client`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,

    /// Absolute url
    pub url: String,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }
}

impl From<Api> for Request {
    fn from(v: Api) -> Self {
        Self::new(v.method(), v.url())
    }
}

impl From<&Api> for Request {
    fn from(v: &Api) -> Self {
        Self::new(v.method(), v.url())
    }
}

/// Body of a successful response
#[derive(Debug, Clone)]
pub struct Response {
    status_code: u16,
    bytes: Bytes,
}

impl Response {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, LightroomError> {
        serde_json::from_slice(&self.bytes).map_err(LightroomError::Decoding)
    }
}

/// Per call options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Strip the preamble the API puts in front of `application/json` bodies
    pub fix_json_content: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            fix_json_content: true,
        }
    }
}

impl ExecuteOptions {
    /// Options for endpoints that are not the Lightroom API
    pub fn raw() -> Self {
        Self {
            fix_json_content: false,
        }
    }
}

/// Directly communicates with the API.
///
/// Cloning is cheap and clones share the connection pool and the access token.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: Config,
    access_token: Mutex<Option<String>>,
    https_client: reqwest::Client,
}

impl Client {
    /// Creates a client for the public API with the given API key (client id)
    pub fn new(api_key: &str) -> Result<Self, LightroomError> {
        Self::from_config(Config::new(api_key))
    }

    pub fn from_config(config: Config) -> Result<Self, LightroomError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let https_client = builder.build().map_err(LightroomError::Transport)?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                access_token: Mutex::new(None),
                https_client,
            }),
        })
    }

    /// Sets the access token and returns the client
    pub fn with_access_token(self, access_token: &str) -> Self {
        self.set_access_token(access_token);
        self
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Current access token.
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .access_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the access token used by all calls started from now on, on all clones
    pub fn set_access_token(&self, access_token: &str) {
        *self
            .inner
            .access_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(access_token.to_string());
    }

    pub fn clear_access_token(&self) {
        *self
            .inner
            .access_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Builds the request for an operation against the configured base url
    pub fn request(&self, api: &Api) -> Request {
        Request::new(api.method(), api.url_with_base(&self.inner.config.base_url))
    }

    /// Executes the request returning the raw body
    pub async fn execute(&self, request: &Request) -> Result<Response, LightroomError> {
        self.execute_with_options(request, ExecuteOptions::default())
            .await
    }

    pub async fn execute_with_options(
        &self,
        request: &Request,
        options: ExecuteOptions,
    ) -> Result<Response, LightroomError> {
        let access_token = self.access_token().ok_or(LightroomError::NoAccessToken)?;

        let req_url = url::Url::parse(&request.url).map_err(RequestError::from)?;
        let headers = self.headers(&access_token)?;

        debug!("{:?} {}", request.method, req_url);
        let resp = self
            .inner
            .https_client
            .request(request.method.into(), req_url)
            .headers(headers)
            .send()
            .await
            .map_err(LightroomError::Execute)?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = if status_has_body(status) {
            Some(resp.bytes().await.map_err(LightroomError::Execute)?)
        } else {
            None
        };

        classify(status, content_type.as_deref(), body, options)
    }

    /// Executes the request and decodes the JSON body as `T`
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: &Request,
    ) -> Result<T, LightroomError> {
        self.execute_json_with_options(request, ExecuteOptions::default())
            .await
    }

    pub async fn execute_json_with_options<T: DeserializeOwned>(
        &self,
        request: &Request,
        options: ExecuteOptions,
    ) -> Result<T, LightroomError> {
        self.execute_with_options(request, options).await?.json()
    }

    /// Executes the request on the current Tokio runtime and hands the result to `callback`.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn execute_with_callback<F>(
        &self,
        request: Request,
        options: ExecuteOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<Response, LightroomError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { callback(client.execute_with_options(&request, options).await) })
    }

    /// Callback flavour of [`Client::execute_json_with_options`].
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn execute_json_with_callback<T, F>(
        &self,
        request: Request,
        options: ExecuteOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, LightroomError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            callback(client.execute_json_with_options(&request, options).await)
        })
    }

    /// Performs a get request for an absolute url
    pub async fn get(&self, url: &str) -> Result<Response, LightroomError> {
        self.execute(&Request::get(url)).await
    }

    pub async fn get_with_options(
        &self,
        url: &str,
        options: ExecuteOptions,
    ) -> Result<Response, LightroomError> {
        self.execute_with_options(&Request::get(url), options)
            .await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LightroomError> {
        self.execute_json(&Request::get(url)).await
    }

    pub async fn get_json_with_options<T: DeserializeOwned>(
        &self,
        url: &str,
        options: ExecuteOptions,
    ) -> Result<T, LightroomError> {
        self.execute_json_with_options(&Request::get(url), options)
            .await
    }

    /// Releases this handle. The connection pool is closed once the last clone is gone.
    ///
    /// Calls still in flight on other clones are not affected.
    pub fn shutdown(self) {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => {
                debug!("Closing connection pool for {}", inner.config.base_url);
                drop(inner);
            }
            Err(_) => debug!("Client still shared, connection pool kept open"),
        }
    }

    fn headers(&self, access_token: &str) -> Result<HeaderMap, LightroomError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&self.inner.config.api_key).map_err(RequestError::from)?;
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(RequestError::from)?;
        bearer.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(headers)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

// 1xx, 204 and 304 responses never carry a message body
fn status_has_body(status: u16) -> bool {
    !(status < 200 || status == 204 || status == 304)
}

// Turns the received status and body into a response or the matching error
fn classify(
    status: u16,
    content_type: Option<&str>,
    body: Option<Bytes>,
    options: ExecuteOptions,
) -> Result<Response, LightroomError> {
    let mut bytes = body.ok_or(LightroomError::NoBody)?;

    // Error bodies carry the preamble as well so this happens before checking the status
    if options.fix_json_content && content_type == Some(JSON_CONTENT_TYPE) {
        trace!("Stripping {} byte JSON preamble", JSON_PREAMBLE_LEN);
        bytes = bytes.slice(JSON_PREAMBLE_LEN.min(bytes.len())..);
    }

    if (200..300).contains(&status) {
        return Ok(Response {
            status_code: status,
            bytes,
        });
    }

    warn!("API Response status: {}", status);
    match serde_json::from_slice::<ErrorResponse>(&bytes) {
        Ok(err) => Err(err.into()),
        Err(err) => {
            debug!("Undecodable error response: {:?}", err);
            Err(LightroomError::Response {
                code: status.into(),
                description: "Unknown".to_string(),
                errors: None,
            })
        }
    }
}
