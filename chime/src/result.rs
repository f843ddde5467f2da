/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync>;

/// A parsed response together with the raw HTTP response it came from.
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<Bytes>,
    pub parsed: O,
}

/// Failed SDK result.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<Bytes>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        raw: http::Response<Bytes>,
        err: E,
    },
}

impl<E> SdkError<E> {
    /// Returns the modeled service error, if the service answered with one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw HTTP response, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<Bytes>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl<E> fmt::Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response error: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "{}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkError;
    use crate::error::BuildError;
    use std::error::Error as _;

    #[test]
    fn construction_failure_keeps_its_source() {
        let err: SdkError<crate::Error> =
            SdkError::ConstructionFailure(Box::new(BuildError::missing_label("AccountId")));
        assert_eq!(
            err.to_string(),
            "failed to construct request: `AccountId` was missing: cannot be empty or unset"
        );
        assert!(err.source().is_some());
        assert!(err.service_error().is_none());
        assert!(err.raw_response().is_none());
    }

    #[test]
    fn service_error_exposes_the_response() {
        let raw = http::Response::builder()
            .status(404)
            .body(bytes::Bytes::new())
            .unwrap();
        let err = SdkError::ServiceError {
            raw,
            err: crate::Error::unhandled("gone"),
        };
        assert_eq!(err.raw_response().unwrap().status(), 404);
        assert_eq!(err.to_string(), "gone");
        assert!(err.into_service_error().is_some());
    }
}
