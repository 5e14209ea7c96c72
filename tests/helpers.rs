/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use httpmock::MockServer;
use lightroom::v2::{Client, Config};
use std::path::PathBuf;

// What the API puts in front of JSON bodies
pub(crate) const PREAMBLE: &str = "while (1) {}";

#[allow(dead_code)]
pub(crate) const API_KEY: &str = "test-api-key";

#[allow(dead_code)]
pub(crate) const ACCESS_TOKEN: &str = "test-access-token";

#[allow(dead_code)]
pub(crate) fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{name}.json"));
    std::fs::read(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

#[allow(dead_code)]
pub(crate) fn with_preamble(body: &[u8]) -> Vec<u8> {
    let mut v = PREAMBLE.as_bytes().to_vec();
    v.extend_from_slice(body);
    v
}

// Client pointed at the mock server with the access token set
#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config::new(API_KEY).with_base_url(&server.url("/v2/"));
    Client::from_config(config)
        .unwrap()
        .with_access_token(ACCESS_TOKEN)
}

// Client for the real service, configured from the environment
#[allow(dead_code)]
pub(crate) fn live_client() -> anyhow::Result<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let access_token = std::env::var("LIGHTROOM_ACCESS_TOKEN")?;
    Ok(Client::from_config(Config::from_env()?)?.with_access_token(&access_token))
}
