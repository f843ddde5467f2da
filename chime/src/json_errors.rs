/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::REQUEST_ID;
use aws_smithy_types::error::metadata::ErrorMetadata;
use bytes::Bytes;
use http::header::HeaderMap;
use serde::Deserialize;

const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Reduces the many shapes an error code can arrive in to the bare shape name.
///
/// `x-amzn-ErrorType` may carry a trailing `:` followed by a URL, and `__type` may be prefixed
/// with the shape namespace followed by `#`.
fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Reads the code, message and request id of an error response.
///
/// The code is taken from the `x-amzn-ErrorType` header, then from `__type` in the body, then
/// from `code` in the body. A body that is not JSON still yields the header values.
pub(crate) fn parse_error_metadata(response: &http::Response<Bytes>) -> ErrorMetadata {
    let body: ErrorBody = if response.body().iter().all(u8::is_ascii_whitespace) {
        ErrorBody::default()
    } else {
        serde_json::from_slice(response.body()).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "error response body is not JSON");
            ErrorBody::default()
        })
    };
    let code = header(response.headers(), ERROR_TYPE_HEADER)
        .or(body.error_type.as_deref())
        .or(body.code.as_deref())
        .map(sanitize_error_code)
        .filter(|code| !code.is_empty());

    let mut builder = ErrorMetadata::builder();
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = body.message.as_deref() {
        builder = builder.message(message);
    }
    if let Some(request_id) = header(response.headers(), REQUEST_ID_HEADER) {
        builder = builder.custom(REQUEST_ID, request_id);
    }
    builder.build()
}

#[cfg(test)]
mod test {
    use super::{parse_error_metadata, sanitize_error_code};
    use crate::error::REQUEST_ID;
    use bytes::Bytes;

    fn response(headers: &[(&str, &str)], body: &'static str) -> http::Response<Bytes> {
        let mut builder = http::Response::builder().status(400);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Bytes::from_static(body.as_bytes())).unwrap()
    }

    #[test]
    fn error_type_sanitization() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[test]
    fn header_wins_over_body() {
        let meta = parse_error_metadata(&response(
            &[("x-amzn-ErrorType", "NotFoundException:http://internal/")],
            r#"{"__type": "aws.chime#ConflictException", "code": "BadRequest", "message": "nope"}"#,
        ));
        assert_eq!(meta.code(), Some("NotFoundException"));
        assert_eq!(meta.message(), Some("nope"));
    }

    #[test]
    fn type_wins_over_code() {
        let meta = parse_error_metadata(&response(
            &[],
            r#"{"__type": "aws.chime#ConflictException", "code": "BadRequest"}"#,
        ));
        assert_eq!(meta.code(), Some("ConflictException"));
    }

    #[test]
    fn code_is_the_last_resort() {
        let meta = parse_error_metadata(&response(&[], r#"{"Code": "ThrottledClientException", "Message": "slow down"}"#));
        assert_eq!(meta.code(), Some("ThrottledClientException"));
        assert_eq!(meta.message(), Some("slow down"));
    }

    #[test]
    fn request_id_and_non_json_body() {
        let meta = parse_error_metadata(&response(
            &[("x-amzn-RequestId", "req-123"), ("x-amzn-ErrorType", "ServiceFailureException")],
            "<html>bad gateway</html>",
        ));
        assert_eq!(meta.code(), Some("ServiceFailureException"));
        assert_eq!(meta.message(), None);
        assert_eq!(meta.extra(REQUEST_ID), Some("req-123"));
    }

    #[test]
    fn no_code_anywhere() {
        let meta = parse_error_metadata(&response(&[], ""));
        assert_eq!(meta.code(), None);
    }
}
