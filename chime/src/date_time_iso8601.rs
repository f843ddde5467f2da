/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! `#[serde(with)]` support for optional timestamps sent as ISO-8601 strings.

use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date_time) => {
            let formatted = date_time
                .fmt(Format::DateTime)
                .map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&formatted)
        }
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    value
        .map(|ts| {
            DateTime::from_str(&ts, Format::DateTime)
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&ts), &"valid iso8601 date"))
        })
        .transpose()
}
