/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by the Amazon Chime operations.
//!
//! Every operation fails with the service-level [`Error`]. Modeled exceptions get their own
//! [`ErrorKind`] variant; anything else the service sends lands in [`ErrorKind::Unhandled`]
//! with its code and message preserved.

use crate::model::ErrorCode;
use aws_smithy_types::error::metadata::{ErrorMetadata, ProvideErrorMetadata};
use aws_smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when a string is not one of the listed values of an enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid {shape} value")]
pub struct UnknownVariantError {
    shape: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(shape: &'static str, value: impl Into<String>) -> Self {
        Self {
            shape,
            value: value.into(),
        }
    }

    /// The name of the enum that rejected the value.
    pub fn shape(&self) -> &str {
        self.shape
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Failure to turn an input into an HTTP request. The request was never dispatched.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A member bound to the URI was unset or empty.
    #[error("`{field}` was missing: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// The request body could not be serialized.
    #[error("failed to serialize the request body")]
    SerializationError(#[from] serde_json::Error),

    /// The configured endpoint and the operation path did not form a valid request.
    #[error("failed to construct the HTTP request")]
    InvalidRequest(#[from] http::Error),
}

impl BuildError {
    pub(crate) fn missing_label(field: &'static str) -> Self {
        BuildError::MissingField {
            field,
            details: "cannot be empty or unset",
        }
    }
}

macro_rules! exceptions {
    ($(
        $(#[doc = $doc:literal])*
        $name:ident => $builder:ident;
    )+) => {
        $(
            shape! {
                $(#[doc = $doc])*
                pub struct $name => $builder {
                    pub code: ErrorCode,
                    pub message: String,
                }
            }

            impl $name {
                /// Returns the error message.
                pub fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($name))?;
                    if let Some(code) = &self.code {
                        write!(f, " [{}]", code)?;
                    }
                    if let Some(message) = &self.message {
                        write!(f, ": {}", message)?;
                    }
                    Ok(())
                }
            }

            impl std::error::Error for $name {}
        )+

        /// Types of errors that an Amazon Chime operation can return.
        #[derive(Debug)]
        #[non_exhaustive]
        pub enum ErrorKind {
            $(
                $(#[doc = $doc])*
                $name($name),
            )+
            /// An unexpected error, e.g. invalid JSON returned by the service or an unknown error code.
            Unhandled(BoxError),
        }

        impl ErrorKind {
            /// Builds the modeled kind matching `code`, or `None` when `code` is not modeled.
            ///
            /// A body that does not parse still yields the modeled kind, carrying the message
            /// from `meta`.
            fn modeled(code: &str, body: &[u8], meta: &ErrorMetadata) -> Option<Self> {
                match code {
                    $(
                        stringify!($name) => Some(ErrorKind::$name(
                            parse_exception::<$name>(body).unwrap_or_else(|err| {
                                tracing::debug!(code, error = %err, "failed to parse exception body");
                                $name {
                                    code: None,
                                    message: meta.message().map(str::to_owned),
                                }
                            }),
                        )),
                    )+
                    _ => None,
                }
            }

            fn message(&self) -> Option<&str> {
                match self {
                    $( ErrorKind::$name(inner) => inner.message(), )+
                    ErrorKind::Unhandled(_) => None,
                }
            }
        }

        impl fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( ErrorKind::$name(inner) => fmt::Display::fmt(inner, f), )+
                    ErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
                }
            }
        }

        impl std::error::Error for Error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match &self.kind {
                    $( ErrorKind::$name(inner) => Some(inner), )+
                    ErrorKind::Unhandled(inner) => Some(inner.as_ref()),
                }
            }
        }
    };
}

exceptions! {
    /// The input parameters don't match the service's restrictions.
    BadRequestException => BadRequestExceptionBuilder;
    /// The client is permanently forbidden from making the request.
    ForbiddenException => ForbiddenExceptionBuilder;
    /// One or more of the resources in the request does not exist in the system.
    NotFoundException => NotFoundExceptionBuilder;
    /// The request could not be processed because of conflict in the current state of the
    /// resource.
    ConflictException => ConflictExceptionBuilder;
    /// The request exceeds the resource limit.
    ResourceLimitExceededException => ResourceLimitExceededExceptionBuilder;
    /// The service encountered an unexpected error.
    ServiceFailureException => ServiceFailureExceptionBuilder;
    /// The service is currently unavailable.
    ServiceUnavailableException => ServiceUnavailableExceptionBuilder;
    /// The client exceeded its request rate limit.
    ThrottledClientException => ThrottledClientExceptionBuilder;
    /// The client is not currently authorized to make the request.
    UnauthorizedClientException => UnauthorizedClientExceptionBuilder;
    /// The request was well-formed but was unable to be followed due to semantic errors.
    UnprocessableEntityException => UnprocessableEntityExceptionBuilder;
    /// You don't have permissions to perform the requested operation.
    AccessDeniedException => AccessDeniedExceptionBuilder;
}

fn parse_exception<T: serde::de::DeserializeOwned + Default>(
    body: &[u8],
) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

pub(crate) const REQUEST_ID: &str = "request_id";

/// Error returned by every Amazon Chime operation.
///
/// `kind` tells which exception the service raised; the code, message and request id the
/// service reported are available through [`ProvideErrorMetadata`].
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: ErrorMetadata,
}

impl Error {
    pub fn new(kind: ErrorKind, meta: ErrorMetadata) -> Self {
        Self { kind, meta }
    }

    /// Builds the error for `code`. Codes that are not modeled become [`ErrorKind::Unhandled`].
    pub(crate) fn from_service(code: Option<&str>, body: &[u8], meta: ErrorMetadata) -> Self {
        let kind = code
            .and_then(|code| ErrorKind::modeled(code, body, &meta))
            .unwrap_or_else(|| ErrorKind::Unhandled(Box::new(GenericError::from_meta(&meta))));
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    /// Returns the error code reported by the service, e.g. `NotFoundException`.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the error message, preferring the one carried by the modeled exception.
    pub fn message(&self) -> Option<&str> {
        self.kind.message().or_else(|| self.meta.message())
    }

    /// Returns the `x-amzn-RequestId` of the failed call, when the service sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.meta.extra(REQUEST_ID)
    }

    /// Returns `true` if the service rejected the call for exceeding its rate limit.
    pub fn is_throttling(&self) -> bool {
        matches!(self.kind, ErrorKind::ThrottledClientException(_))
    }

    /// Returns `true` if the error kind is `ErrorKind::NotFoundException`.
    pub fn is_not_found_exception(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFoundException(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl ProvideErrorMetadata for Error {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }

    fn message(&self) -> Option<&str> {
        Error::message(self)
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match &self.kind {
            ErrorKind::ThrottledClientException(_) => Some(RetryErrorKind::ThrottlingError),
            ErrorKind::ServiceFailureException(_) | ErrorKind::ServiceUnavailableException(_) => {
                Some(RetryErrorKind::ServerError)
            }
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        self.meta.code()
    }
}

/// GenericError represents an error from the service that is not modeled
#[derive(Debug, PartialEq, Eq)]
struct GenericError {
    code: Option<String>,
    message: Option<String>,
}

impl GenericError {
    fn from_meta(meta: &ErrorMetadata) -> Self {
        Self {
            code: meta.code().map(str::to_owned),
            message: meta.message().map(str::to_owned),
        }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericError")?;
        if let Some(code) = &self.code {
            write!(f, " ({})", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for GenericError {}

#[cfg(test)]
mod test {
    use super::*;

    fn meta(code: &str) -> ErrorMetadata {
        ErrorMetadata::builder().code(code).build()
    }

    #[test]
    fn exception_display_includes_code_and_message() {
        let err = NotFoundException::builder()
            .code(ErrorCode::NotFound)
            .message("no such user")
            .build();
        assert_eq!(err.to_string(), "NotFoundException [NotFound]: no such user");
    }

    #[test]
    fn modeled_code_selects_the_exception() {
        let err = Error::from_service(
            Some("ForbiddenException"),
            br#"{"Code":"Forbidden","Message":"nope"}"#,
            meta("ForbiddenException"),
        );
        assert_eq!(err.code(), Some("ForbiddenException"));
        assert_eq!(err.message(), Some("nope"));
        match err.kind {
            ErrorKind::ForbiddenException(inner) => {
                assert_eq!(inner.code, Some(ErrorCode::Forbidden))
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn unknown_code_is_unhandled() {
        let err = Error::from_service(Some("SomethingNew"), b"{}", meta("SomethingNew"));
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("SomethingNew"));
        assert_eq!(err.to_string(), "GenericError (SomethingNew)");
    }

    #[test]
    fn empty_body_builds_an_empty_exception() {
        let err = Error::from_service(Some("ConflictException"), b"", meta("ConflictException"));
        assert!(matches!(
            err.kind,
            ErrorKind::ConflictException(ConflictException {
                code: None,
                message: None
            })
        ));
    }

    #[test]
    #[tracing_test::traced_test]
    fn malformed_exception_body_keeps_the_modeled_kind() {
        let meta = ErrorMetadata::builder()
            .code("NotFoundException")
            .message("gone")
            .build();
        let err = Error::from_service(Some("NotFoundException"), b"{not json", meta);
        assert!(err.is_not_found_exception());
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.message(), Some("gone"));
        assert!(logs_contain("failed to parse exception body"));
    }

    #[test]
    fn throttling_survives_an_unlisted_code_in_the_body() {
        let err = Error::from_service(
            Some("ThrottledClientException"),
            br#"{"Code":"RateExceeded","Message":"slow down"}"#,
            meta("ThrottledClientException"),
        );
        assert!(err.is_throttling());
        assert_eq!(
            err.retryable_error_kind(),
            Some(RetryErrorKind::ThrottlingError)
        );
        match err.kind {
            ErrorKind::ThrottledClientException(inner) => {
                assert_eq!(inner.code, Some(ErrorCode::Unknown("RateExceeded".into())));
                assert_eq!(inner.message(), Some("slow down"));
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn malformed_throttling_body_is_still_retryable() {
        let err = Error::from_service(
            Some("ThrottledClientException"),
            b"<html>Too Many Requests</html>",
            meta("ThrottledClientException"),
        );
        assert_eq!(
            err.retryable_error_kind(),
            Some(RetryErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn throttling_is_retryable() {
        let err = Error::from_service(
            Some("ThrottledClientException"),
            b"{}",
            meta("ThrottledClientException"),
        );
        assert!(err.is_throttling());
        assert_eq!(
            err.retryable_error_kind(),
            Some(RetryErrorKind::ThrottlingError)
        );
        let err = Error::from_service(Some("BadRequestException"), b"{}", meta("BadRequestException"));
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn request_id_comes_from_metadata() {
        let err = Error::from_service(
            None,
            b"",
            ErrorMetadata::builder()
                .message("something broke")
                .custom(REQUEST_ID, "req-1")
                .build(),
        );
        assert_eq!(err.request_id(), Some("req-1"));
        assert_eq!(err.to_string(), "GenericError: something broke");
    }

    #[test]
    fn missing_label_message() {
        assert_eq!(
            BuildError::missing_label("account_id").to_string(),
            "`account_id` was missing: cannot be empty or unset"
        );
    }

    #[test]
    fn unknown_variant_names_the_enum() {
        let err = "Gold".parse::<crate::model::License>().unwrap_err();
        assert_eq!(err.shape(), "License");
        assert_eq!(err.value(), "Gold");
        assert_eq!(err.to_string(), "`Gold` is not a valid License value");
    }
}
