/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::idempotency_token::{self, MakeIdempotencyToken};
use aws_types::region::Region;
use std::fmt;
use std::sync::Arc;

/// The global Amazon Chime endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://service.chime.aws.amazon.com";

const REGION_ENV_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];
const ENDPOINT_ENV_VARS: &[&str] = &["AWS_ENDPOINT_URL_CHIME", "AWS_ENDPOINT_URL"];

/// Service configuration shared by every operation.
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint: String,
    pub(crate) token_provider: Arc<dyn MakeIdempotencyToken>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Loads the region and endpoint from the process environment.
    ///
    /// The region comes from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`. The endpoint
    /// comes from `AWS_ENDPOINT_URL_CHIME`, falling back to `AWS_ENDPOINT_URL`. Endpoint values
    /// that are not absolute URIs are skipped.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_env_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Builder::default();
        if let Some(region) = REGION_ENV_VARS
            .iter()
            .find_map(|key| env(key).filter(|v| !v.trim().is_empty()))
        {
            builder = builder.region(Region::new(region));
        }
        for key in ENDPOINT_ENV_VARS {
            let value = match env(key) {
                Some(value) if !value.trim().is_empty() => value,
                _ => continue,
            };
            if is_absolute_uri(&value) {
                tracing::debug!(source = *key, endpoint = %value, "using endpoint from the environment");
                builder = builder.endpoint(value);
                break;
            }
            tracing::warn!(source = *key, endpoint = %value, "ignoring invalid endpoint");
        }
        builder.build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn make_token(&self) -> String {
        self.token_provider.make_idempotency_token()
    }
}

fn is_absolute_uri(value: &str) -> bool {
    match value.parse::<http::Uri>() {
        Ok(uri) => uri.scheme().is_some() && uri.authority().is_some(),
        Err(_) => false,
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<String>,
    token_provider: Option<Arc<dyn MakeIdempotencyToken>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Overrides the endpoint requests are sent to, e.g. `http://localhost:8000`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn token_provider(mut self, token_provider: impl MakeIdempotencyToken + 'static) -> Self {
        self.token_provider = Some(Arc::new(token_provider));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token_provider: self
                .token_provider
                .unwrap_or_else(|| Arc::new(idempotency_token::default_provider())),
        }
    }
}
