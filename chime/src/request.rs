/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::BuildError;
use crate::uri_encode;
use crate::Config;
use aws_smithy_types::body::SdkBody;
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::Method;
use serde::Serialize;
use std::fmt;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn user_agent() -> String {
    format!("aws-sdk-rust/{v} api/chime/{v} lang/rust", v = PKG_VERSION)
}

/// Assembles a REST request: path segments and labels, then query parameters, then the body.
pub(crate) struct RequestBuilder<'a> {
    config: &'a Config,
    method: Method,
    path: String,
    query: Vec<String>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(method: Method, config: &'a Config) -> Self {
        RequestBuilder {
            config,
            method,
            path: String::new(),
            query: Vec::new(),
        }
    }

    pub(crate) fn get(config: &'a Config) -> Self {
        Self::new(Method::GET, config)
    }

    pub(crate) fn post(config: &'a Config) -> Self {
        Self::new(Method::POST, config)
    }

    pub(crate) fn delete(config: &'a Config) -> Self {
        Self::new(Method::DELETE, config)
    }

    /// Appends a literal path segment.
    pub(crate) fn segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Appends a path segment bound to an input member.
    ///
    /// Unset and empty values are rejected: an empty segment would address a different resource.
    pub(crate) fn label(
        mut self,
        field: &'static str,
        value: Option<&String>,
    ) -> Result<Self, BuildError> {
        match value {
            Some(value) if !value.is_empty() => {
                self.path.push('/');
                self.path.push_str(&uri_encode::label(value));
                Ok(self)
            }
            _ => Err(BuildError::missing_label(field)),
        }
    }

    /// Appends the literal `operation=` query parameter some URIs use to tell actions apart.
    pub(crate) fn operation(mut self, operation: &str) -> Self {
        self.query.push(format!("operation={}", operation));
        self
    }

    /// Appends `key=value` when `value` is set.
    pub(crate) fn query<T: fmt::Display>(mut self, key: &str, value: Option<&T>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            self.query
                .push(format!("{}={}", key, uri_encode::query(&value)));
        }
        self
    }

    fn uri(&self) -> String {
        let mut uri = self.config.endpoint().trim_end_matches('/').to_string();
        uri.push_str(&self.path);
        if !self.query.is_empty() {
            uri.push('?');
            uri.push_str(&self.query.join("&"));
        }
        uri
    }

    /// Builds a request without a body.
    pub(crate) fn empty(self) -> Result<http::Request<SdkBody>, BuildError> {
        let request = http::Request::builder()
            .method(self.method.clone())
            .uri(self.uri())
            .header(USER_AGENT, user_agent())
            .body(SdkBody::empty())?;
        Ok(request)
    }

    /// Builds a request whose body is the JSON form of `body`.
    pub(crate) fn json<T: Serialize>(self, body: &T) -> Result<http::Request<SdkBody>, BuildError> {
        let body = serde_json::to_vec(body)?;
        let request = http::Request::builder()
            .method(self.method.clone())
            .uri(self.uri())
            .header(USER_AGENT, user_agent())
            .header(CONTENT_TYPE, "application/json")
            .body(SdkBody::from(body))?;
        Ok(request)
    }
}
