/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Streams over the pages of the `List*` operations.
//!
//! Each paginator sends its input, yields the page, and sends the input again with `NextToken`
//! copied from the page. It stops after the first error, after a page without a token, and after
//! a page that returns the token that was just sent.

use crate::client::Client;
use crate::input::{
    ListAccountsInput, ListAttendeesInput, ListMeetingsInput, ListPhoneNumbersInput,
    ListRoomMembershipsInput, ListRoomsInput, ListUsersInput,
};
use crate::model::{Account, Attendee, Meeting, PhoneNumber, Room, RoomMembership, User};
use crate::output::{
    ListAccountsOutput, ListAttendeesOutput, ListMeetingsOutput, ListPhoneNumbersOutput,
    ListRoomMembershipsOutput, ListRoomsOutput, ListUsersOutput,
};
use crate::result::SdkError;
use crate::Error;
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;
use tokio_stream::{Stream, StreamExt};
use tower::{BoxError, Service};

macro_rules! paginator {
    ($(
        $paginator:ident: $input:ident => $output:ident, $items:ident: $item:ident;
    )+) => {
        $(
            #[doc = concat!("Paginator for [`", stringify!($input), "`].")]
            pub struct $paginator<C> {
                client: Client<C>,
                input: $input,
            }

            impl $input {
                /// Creates a paginator that starts from this input.
                pub fn paginate<C: Clone>(self, client: &Client<C>) -> $paginator<C> {
                    $paginator {
                        client: client.clone(),
                        input: self,
                    }
                }
            }

            impl<C> $paginator<C>
            where
                C: Service<http::Request<SdkBody>, Response = http::Response<Bytes>, Error = BoxError>
                    + Clone,
            {
                /// Creates the page stream. Nothing is sent until the stream is polled.
                pub fn send(self) -> impl Stream<Item = Result<$output, SdkError<Error>>> + Unpin {
                    let $paginator { client, mut input } = self;
                    Box::pin(async_stream::stream! {
                        loop {
                            let operation = match input.make_operation(client.conf()) {
                                Ok(operation) => operation,
                                Err(err) => {
                                    yield Err(SdkError::ConstructionFailure(err.into()));
                                    break;
                                }
                            };
                            match client.call(operation).await {
                                Ok(page) => {
                                    let next_token = page.next_token.clone().filter(|token| !token.is_empty());
                                    let repeated = next_token.is_some() && next_token == input.next_token;
                                    yield Ok(page);
                                    match next_token {
                                        Some(_) if repeated => {
                                            tracing::warn!(
                                                paginator = stringify!($paginator),
                                                "service returned the same next token twice, stopping"
                                            );
                                            break;
                                        }
                                        Some(token) => input.next_token = Some(token),
                                        None => {
                                            tracing::debug!(paginator = stringify!($paginator), "no next token, pagination complete");
                                            break;
                                        }
                                    }
                                }
                                Err(err) => {
                                    yield Err(err);
                                    break;
                                }
                            }
                        }
                    })
                }

                #[doc = concat!("Flattens the pages into a stream of [`", stringify!($item), "`].")]
                pub fn items(self) -> impl Stream<Item = Result<$item, SdkError<Error>>> + Unpin {
                    let mut pages = self.send();
                    Box::pin(async_stream::stream! {
                        while let Some(page) = pages.next().await {
                            match page {
                                Ok(page) => {
                                    for item in page.$items.unwrap_or_default() {
                                        yield Ok(item);
                                    }
                                }
                                Err(err) => {
                                    yield Err(err);
                                }
                            }
                        }
                    })
                }
            }
        )+
    };
}

paginator! {
    ListAccountsPaginator: ListAccountsInput => ListAccountsOutput, accounts: Account;
    ListUsersPaginator: ListUsersInput => ListUsersOutput, users: User;
    ListPhoneNumbersPaginator: ListPhoneNumbersInput => ListPhoneNumbersOutput, phone_numbers: PhoneNumber;
    ListMeetingsPaginator: ListMeetingsInput => ListMeetingsOutput, meetings: Meeting;
    ListAttendeesPaginator: ListAttendeesInput => ListAttendeesOutput, attendees: Attendee;
    ListRoomsPaginator: ListRoomsInput => ListRoomsOutput, rooms: Room;
    ListRoomMembershipsPaginator: ListRoomMembershipsInput => ListRoomMembershipsOutput, room_memberships: RoomMembership;
}
