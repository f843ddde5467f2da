/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::json_errors::parse_error_metadata;
use crate::Error;
use bytes::Bytes;
use http::Response;
use serde::de::DeserializeOwned;

/// Parses a fully loaded HTTP response into an operation result.
///
/// None of the Amazon Chime operations stream their bodies, so handlers always see the whole
/// response at once.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// Parses a REST-JSON response into `O`, or into the service [`Error`] when the status is not 2xx.
///
/// A 2xx response with an empty body yields `O::default()`, which is how operations without
/// output members report success.
pub(crate) fn parse_json_response<O>(response: &Response<Bytes>) -> Result<O, Error>
where
    O: DeserializeOwned + Default,
{
    if !response.status().is_success() {
        return Err(parse_json_error(response));
    }
    let body = response.body();
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    serde_json::from_slice(body).map_err(Error::unhandled)
}

fn parse_json_error(response: &Response<Bytes>) -> Error {
    let meta = parse_error_metadata(response);
    let code = meta.code().map(str::to_string);
    let err = Error::from_service(code.as_deref(), response.body(), meta);
    tracing::debug!(
        status = response.status().as_u16(),
        code = ?err.code(),
        request_id = ?err.request_id(),
        "service returned an error"
    );
    err
}

#[cfg(test)]
mod test {
    use super::parse_json_response;
    use crate::error::ErrorKind;
    use crate::model::ErrorCode;
    use crate::output::{DeleteAccountOutput, GetAccountOutput};
    use bytes::Bytes;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn success_parses_output() {
        let output: GetAccountOutput = parse_json_response(&response(
            200,
            r#"{"Account": {"AccountId": "acct-1", "Name": "Example"}}"#,
        ))
        .unwrap();
        let account = output.account.unwrap();
        assert_eq!(account.account_id.as_deref(), Some("acct-1"));
        assert_eq!(account.name.as_deref(), Some("Example"));
    }

    #[test]
    fn empty_success_body_is_the_default_output() {
        let output: DeleteAccountOutput = parse_json_response(&response(204, "")).unwrap();
        assert_eq!(output, DeleteAccountOutput::default());
    }

    #[test]
    fn unexpected_members_are_ignored() {
        let output: GetAccountOutput =
            parse_json_response(&response(200, r#"{"Account": {}, "Extra": 5}"#)).unwrap();
        assert!(output.account.is_some());
    }

    #[test]
    fn malformed_success_body_is_unhandled() {
        let err = parse_json_response::<GetAccountOutput>(&response(200, "{")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    }

    #[test]
    fn error_status_parses_the_exception() {
        let err = parse_json_response::<GetAccountOutput>(
            &http::Response::builder()
                .status(404)
                .header("x-amzn-ErrorType", "NotFoundException")
                .header("x-amzn-RequestId", "req-1")
                .body(Bytes::from_static(
                    br#"{"Code": "NotFound", "Message": "no such account"}"#,
                ))
                .unwrap(),
        )
        .unwrap_err();
        match &err.kind {
            ErrorKind::NotFoundException(inner) => {
                assert_eq!(inner.code, Some(ErrorCode::NotFound));
                assert_eq!(inner.message(), Some("no such account"));
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
        assert_eq!(err.request_id(), Some("req-1"));
        assert!(err.is_not_found_exception());
    }

    #[test]
    fn unmodeled_error_keeps_code_and_message() {
        let err = parse_json_response::<GetAccountOutput>(&response(
            418,
            r#"{"__type": "aws.chime#TeapotException", "message": "short and stout"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("TeapotException"));
        assert_eq!(err.message(), Some("short and stout"));
    }
}
