/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::Operation;
use crate::response::ParseStrictResponse;
use crate::result::{SdkError, SdkSuccess};
use crate::{Config, Error};
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;
use tower::{BoxError, Service, ServiceExt};
use tracing::Instrument;

/// Sends [`Operation`]s over a connector and parses the responses.
///
/// The connector is any `tower::Service` that turns an `http::Request<SdkBody>` into a fully
/// loaded `http::Response<Bytes>`. Signing, retries and the transport itself belong to the
/// connector; see [`TestConnection`](crate::test_connection::TestConnection) for a connector that
/// replays canned responses.
#[derive(Clone)]
pub struct Client<C> {
    conf: Config,
    conn: C,
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        Client { conf, conn }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }

    pub fn connector(&self) -> &C {
        &self.conn
    }
}

impl<C> Client<C>
where
    C: Service<http::Request<SdkBody>, Response = http::Response<Bytes>, Error = BoxError>
        + Clone,
{
    /// Dispatches an operation and returns its parsed output.
    pub async fn call<H, O>(&self, operation: Operation<H>) -> Result<O, SdkError<Error>>
    where
        H: ParseStrictResponse<Output = Result<O, Error>>,
    {
        self.call_raw(operation).await.map(|success| success.parsed)
    }

    /// Dispatches an operation and returns its parsed output together with the raw response.
    pub async fn call_raw<H, O>(
        &self,
        operation: Operation<H>,
    ) -> Result<SdkSuccess<O>, SdkError<Error>>
    where
        H: ParseStrictResponse<Output = Result<O, Error>>,
    {
        let (request, handler, metadata) = operation.into_request_response();
        let span = match &metadata {
            Some(metadata) => tracing::debug_span!(
                "dispatch",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => tracing::debug_span!("dispatch"),
        };
        let conn = self.conn.clone();
        async move {
            tracing::debug!(method = %request.method(), uri = %request.uri(), "sending request");
            let response = conn
                .oneshot(request)
                .await
                .map_err(SdkError::DispatchFailure)?;
            tracing::debug!(status = response.status().as_u16(), "received response");
            let status = response.status();
            match handler.parse(&response) {
                Ok(parsed) => Ok(SdkSuccess {
                    raw: response,
                    parsed,
                }),
                Err(err) if status.is_success() => Err(SdkError::ResponseError {
                    raw: response,
                    err: Box::new(err),
                }),
                Err(err) => Err(SdkError::ServiceError { raw: response, err }),
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod test {
    use super::Client;
    use crate::input::{DeleteMeetingInput, GetAccountInput};
    use crate::result::SdkError;
    use crate::test_connection::TestConnection;
    use crate::Config;
    use aws_smithy_types::body::SdkBody;

    fn client(conn: TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
        Client::from_conf_conn(
            Config::builder().endpoint("https://chime.test").build(),
            conn,
        )
    }

    #[tokio::test]
    async fn parses_success() {
        let conn = TestConnection::new(vec![(
            http::Request::builder()
                .uri("https://chime.test/accounts/acct-1")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(r#"{"Account": {"AccountId": "acct-1"}}"#)
                .unwrap(),
        )]);
        let client = client(conn.clone());
        let op = GetAccountInput::builder()
            .account_id("acct-1")
            .build()
            .make_operation(client.conf())
            .unwrap();
        let output = client.call(op).await.unwrap();
        assert_eq!(
            output.account.unwrap().account_id.as_deref(),
            Some("acct-1")
        );
        assert_eq!(conn.requests().len(), 1);
        conn.requests()[0].assert_matches(vec![]);
    }

    #[tokio::test]
    async fn error_status_is_a_service_error() {
        let conn = TestConnection::new(vec![(
            http::Request::builder()
                .uri("https://chime.test/meetings/m-1")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(404)
                .header("x-amzn-ErrorType", "NotFoundException")
                .body(r#"{"Code": "NotFound", "Message": "meeting ended"}"#)
                .unwrap(),
        )]);
        let client = client(conn);
        let op = DeleteMeetingInput::builder()
            .meeting_id("m-1")
            .build()
            .make_operation(client.conf())
            .unwrap();
        let err = client.call(op).await.unwrap_err();
        let service_error = err.service_error().expect("service error");
        assert!(service_error.is_not_found_exception());
        assert_eq!(service_error.message(), Some("meeting ended"));
        assert_eq!(err.raw_response().unwrap().status(), 404);
    }

    #[tokio::test]
    async fn garbled_success_body_is_a_response_error() {
        let conn = TestConnection::new(vec![(
            http::Request::new(SdkBody::empty()),
            http::Response::builder().status(200).body("{").unwrap(),
        )]);
        let client = client(conn);
        let op = GetAccountInput::builder()
            .account_id("acct-1")
            .build()
            .make_operation(client.conf())
            .unwrap();
        assert!(matches!(
            client.call(op).await,
            Err(SdkError::ResponseError { .. })
        ));
    }

    #[tokio::test]
    async fn exhausted_connection_is_a_dispatch_failure() {
        let client = client(TestConnection::new(vec![]));
        let op = GetAccountInput::builder()
            .account_id("acct-1")
            .build()
            .make_operation(client.conf())
            .unwrap();
        assert!(matches!(
            client.call(op).await,
            Err(SdkError::DispatchFailure(_))
        ));
    }
}
