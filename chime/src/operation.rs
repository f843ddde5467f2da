/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Ready-to-send requests and the response handlers that parse them.
//!
//! Every `<Op>Input::make_operation` returns an [`Operation`] pairing the serialized HTTP request
//! with the zero-sized handler `<Op>` defined here.

use crate::response::{parse_json_response, ParseStrictResponse};
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;
use std::borrow::Cow;

pub(crate) const SERVICE_NAME: &str = "chime";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// An HTTP request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<SdkBody>,
    response_handler: H,
    metadata: Option<Metadata>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<SdkBody>, response_handler: H) -> Self {
        Operation {
            request,
            response_handler,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn request(&self) -> &http::Request<SdkBody> {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.request
    }

    pub fn into_request_response(self) -> (http::Request<SdkBody>, H, Option<Metadata>) {
        (self.request, self.response_handler, self.metadata)
    }
}

impl<H: Default> Operation<H> {
    pub(crate) fn for_service(request: http::Request<SdkBody>, name: &'static str) -> Self {
        Operation::new(request, H::default()).with_metadata(Metadata::new(name, SERVICE_NAME))
    }
}

macro_rules! operations {
    ($( $name:ident => $output:ident; )+) => {
        $(
            #[doc = concat!("Response handler for the `", stringify!($name), "` operation.")]
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<crate::output::$output, crate::Error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    tracing::trace!(operation = stringify!($name), status = response.status().as_u16(), "parsing response");
                    parse_json_response(response)
                }
            }
        )+
    };
}

operations! {
    CreateAccount => CreateAccountOutput;
    GetAccount => GetAccountOutput;
    UpdateAccount => UpdateAccountOutput;
    DeleteAccount => DeleteAccountOutput;
    ListAccounts => ListAccountsOutput;
    CreateUser => CreateUserOutput;
    GetUser => GetUserOutput;
    UpdateUser => UpdateUserOutput;
    ListUsers => ListUsersOutput;
    BatchUpdateUser => BatchUpdateUserOutput;
    BatchSuspendUser => BatchSuspendUserOutput;
    BatchUnsuspendUser => BatchUnsuspendUserOutput;
    InviteUsers => InviteUsersOutput;
    ResetPersonalPin => ResetPersonalPinOutput;
    LogoutUser => LogoutUserOutput;
    GetPhoneNumber => GetPhoneNumberOutput;
    ListPhoneNumbers => ListPhoneNumbersOutput;
    UpdatePhoneNumber => UpdatePhoneNumberOutput;
    DeletePhoneNumber => DeletePhoneNumberOutput;
    BatchUpdatePhoneNumber => BatchUpdatePhoneNumberOutput;
    BatchDeletePhoneNumber => BatchDeletePhoneNumberOutput;
    AssociatePhoneNumberWithUser => AssociatePhoneNumberWithUserOutput;
    DisassociatePhoneNumberFromUser => DisassociatePhoneNumberFromUserOutput;
    CreateMeeting => CreateMeetingOutput;
    GetMeeting => GetMeetingOutput;
    ListMeetings => ListMeetingsOutput;
    DeleteMeeting => DeleteMeetingOutput;
    CreateAttendee => CreateAttendeeOutput;
    BatchCreateAttendee => BatchCreateAttendeeOutput;
    GetAttendee => GetAttendeeOutput;
    ListAttendees => ListAttendeesOutput;
    DeleteAttendee => DeleteAttendeeOutput;
    CreateRoom => CreateRoomOutput;
    ListRooms => ListRoomsOutput;
    BatchCreateRoomMembership => BatchCreateRoomMembershipOutput;
    ListRoomMemberships => ListRoomMembershipsOutput;
    PutVoiceConnectorTerminationCredentials => PutVoiceConnectorTerminationCredentialsOutput;
    ListVoiceConnectorTerminationCredentials => ListVoiceConnectorTerminationCredentialsOutput;
    DeleteVoiceConnectorTerminationCredentials => DeleteVoiceConnectorTerminationCredentialsOutput;
}

#[cfg(test)]
mod test {
    use super::{GetUser, Metadata, Operation};
    use crate::response::ParseStrictResponse;
    use aws_smithy_types::body::SdkBody;
    use bytes::Bytes;

    #[test]
    fn operation_carries_metadata() {
        let request = http::Request::builder()
            .uri("https://service.chime.aws.amazon.com/accounts/a/users/u")
            .body(SdkBody::empty())
            .unwrap();
        let op: Operation<GetUser> = Operation::for_service(request, "GetUser");
        assert_eq!(op.metadata(), Some(&Metadata::new("GetUser", "chime")));
        let (request, _handler, metadata) = op.into_request_response();
        assert_eq!(request.uri().path(), "/accounts/a/users/u");
        assert_eq!(metadata.unwrap().service(), "chime");
    }

    #[test]
    fn handler_parses_its_own_output() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(br#"{"User": {"UserId": "u-1"}}"#))
            .unwrap();
        let output = GetUser::new().parse(&response).unwrap();
        assert_eq!(output.user.unwrap().user_id.as_deref(), Some("u-1"));
    }
}
