// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rolodex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rolodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Remote profile source.
//!
//! One-shot fetch against a randomuser-compatible endpoint. Any source
//! returning the same wire shape is interchangeable; the endpoint is
//! configurable for exactly that reason.

mod wire;

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::model::Profile;

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_RESULT_COUNT: u16 = 12;
pub const DEFAULT_NATIONALITY: &str = "au";

const INCLUDED_FIELDS: &str = "name,location,email,picture,cell,dob";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("rolodex/", env!("CARGO_PKG_VERSION"));

/// Parameters of the one-shot directory fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    endpoint: String,
    result_count: u16,
    nationality: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            result_count: DEFAULT_RESULT_COUNT,
            nationality: DEFAULT_NATIONALITY.to_owned(),
        }
    }
}

impl SourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_result_count(mut self, result_count: u16) -> Self {
        self.result_count = result_count;
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn result_count(&self) -> u16 {
        self.result_count
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }
}

#[derive(Debug)]
pub enum SourceError {
    /// The request could not be sent or the body could not be read.
    Request(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The body was not the expected wire shape.
    Decode(serde_json::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "request failed: {err}"),
            Self::Status(status) => write!(f, "unexpected response status {status}"),
            Self::Decode(err) => write!(f, "response body did not decode: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Status(_) => None,
            Self::Decode(err) => Some(err),
        }
    }
}

/// Fetches the directory once and decodes it into the model.
///
/// There is no retry and no cancellation; the caller decides what an empty
/// directory means for the UI.
pub async fn fetch_directory(options: &SourceOptions) -> Result<Vec<Profile>, SourceError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(SourceError::Request)?;

    let result_count = options.result_count().to_string();
    let response = client
        .get(options.endpoint())
        .query(&[
            ("results", result_count.as_str()),
            ("inc", INCLUDED_FIELDS),
            ("nat", options.nationality()),
        ])
        .send()
        .await
        .map_err(SourceError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(SourceError::Request)?;
    decode_directory(&body)
}

/// Decodes a response body into profiles, preserving the source order.
pub fn decode_directory(body: &str) -> Result<Vec<Profile>, SourceError> {
    let response: wire::DirectoryResponse =
        serde_json::from_str(body).map_err(SourceError::Decode)?;
    Ok(wire::profiles_from_response(response))
}

#[cfg(test)]
mod tests {
    use super::{decode_directory, SourceError, SourceOptions};

    #[test]
    fn options_default_to_the_original_request() {
        let options = SourceOptions::new();
        assert_eq!(options.endpoint(), "https://randomuser.me/api/");
        assert_eq!(options.result_count(), 12);
        assert_eq!(options.nationality(), "au");
    }

    #[test]
    fn options_builders_override_each_field() {
        let options = SourceOptions::new()
            .with_endpoint("http://127.0.0.1:9999/api/")
            .with_result_count(3)
            .with_nationality("nz");
        assert_eq!(options.endpoint(), "http://127.0.0.1:9999/api/");
        assert_eq!(options.result_count(), 3);
        assert_eq!(options.nationality(), "nz");
    }

    #[test]
    fn decode_rejects_non_wire_bodies() {
        let err = decode_directory("not json").expect_err("decode error");
        assert!(matches!(err, SourceError::Decode(_)));
        assert!(err.to_string().contains("did not decode"));
    }

    #[test]
    fn status_error_displays_the_code() {
        assert_eq!(SourceError::Status(503).to_string(), "unexpected response status 503");
    }
}
