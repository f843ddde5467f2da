/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Requests for the Amazon Chime operations.
//!
//! Members bound to the URI (path labels and query parameters) are marked `#[serde(skip)]`, so
//! serializing an input yields exactly its JSON body.

use crate::error::BuildError;
use crate::model::{
    AlexaForBusinessMetadata, CreateAttendeeRequestItem, Credential, License,
    MeetingNotificationConfiguration, MembershipItem, PhoneNumberAssociationName,
    PhoneNumberProductType, PhoneNumberStatus, Tag, UpdatePhoneNumberRequestItem,
    UpdateUserRequestItem, UserType,
};
use crate::operation::{self, Operation};
use crate::request::RequestBuilder;
use crate::Config;

shape! {
    pub struct CreateAccountInput => CreateAccountInputBuilder {
        /// The name of the Amazon Chime account.
        pub name: String,
    }
}

impl CreateAccountInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::CreateAccount>, BuildError> {
        let request = RequestBuilder::post(config).segment("accounts").json(self)?;
        Ok(Operation::for_service(request, "CreateAccount"))
    }
}

shape! {
    pub struct GetAccountInput => GetAccountInputBuilder {
        #[serde(skip)]
        pub account_id: String,
    }
}

impl GetAccountInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::GetAccount>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "GetAccount"))
    }
}

shape! {
    pub struct UpdateAccountInput => UpdateAccountInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The new name for the specified Amazon Chime account.
        pub name: String,
        /// The default license applied when you add users to an Amazon Chime account.
        pub default_license: License,
    }
}

impl UpdateAccountInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::UpdateAccount>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .json(self)?;
        Ok(Operation::for_service(request, "UpdateAccount"))
    }
}

shape! {
    pub struct DeleteAccountInput => DeleteAccountInputBuilder {
        #[serde(skip)]
        pub account_id: String,
    }
}

impl DeleteAccountInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::DeleteAccount>, BuildError> {
        let request = RequestBuilder::delete(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "DeleteAccount"))
    }
}

shape! {
    pub struct ListAccountsInput => ListAccountsInputBuilder {
        /// Amazon Chime account name prefix with which to filter results.
        #[serde(skip)]
        pub name: String,
        /// User email address with which to filter results.
        #[serde(skip)]
        pub user_email: String,
        #[serde(skip)]
        pub next_token: String,
        /// The maximum number of results to return in a single call. Defaults to 100.
        #[serde(skip)]
        pub max_results: i32,
    }
}

impl ListAccountsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ListAccounts>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("accounts")
            .query("name", self.name.as_ref())
            .query("user-email", self.user_email.as_ref())
            .query("next-token", self.next_token.as_ref())
            .query("max-results", self.max_results.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListAccounts"))
    }
}

shape! {
    pub struct CreateUserInput => CreateUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        pub username: String,
        /// The user's email address.
        pub email: String,
        pub user_type: UserType,
    }
}

impl CreateUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::CreateUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .operation("create")
            .json(self)?;
        Ok(Operation::for_service(request, "CreateUser"))
    }
}

shape! {
    pub struct GetUserInput => GetUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub user_id: String,
    }
}

impl GetUserInput {
    pub fn make_operation(&self, config: &Config) -> Result<Operation<operation::GetUser>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .label("UserId", self.user_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "GetUser"))
    }
}

shape! {
    pub struct UpdateUserInput => UpdateUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub user_id: String,
        pub license_type: License,
        pub user_type: UserType,
        /// The Alexa for Business metadata.
        pub alexa_for_business_metadata: AlexaForBusinessMetadata,
    }
}

impl UpdateUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::UpdateUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .label("UserId", self.user_id.as_ref())?
            .json(self)?;
        Ok(Operation::for_service(request, "UpdateUser"))
    }
}

shape! {
    pub struct ListUsersInput => ListUsersInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// Optional. The user email address used to filter results. Maximum 1.
        #[serde(skip)]
        pub user_email: String,
        #[serde(skip)]
        pub user_type: UserType,
        #[serde(skip)]
        pub max_results: i32,
        #[serde(skip)]
        pub next_token: String,
    }
}

impl ListUsersInput {
    pub fn make_operation(&self, config: &Config) -> Result<Operation<operation::ListUsers>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .query("user-email", self.user_email.as_ref())
            .query("user-type", self.user_type.as_ref())
            .query("max-results", self.max_results.as_ref())
            .query("next-token", self.next_token.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListUsers"))
    }
}

shape! {
    pub struct BatchUpdateUserInput => BatchUpdateUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The request containing the user IDs and details to update.
        pub update_user_request_items: Vec<UpdateUserRequestItem>,
    }
}

impl BatchUpdateUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchUpdateUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchUpdateUser"))
    }
}

shape! {
    pub struct BatchSuspendUserInput => BatchSuspendUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The request containing the user IDs to suspend.
        pub user_id_list: Vec<String>,
    }
}

impl BatchSuspendUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchSuspendUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .operation("suspend")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchSuspendUser"))
    }
}

shape! {
    pub struct BatchUnsuspendUserInput => BatchUnsuspendUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The request containing the user IDs to unsuspend.
        pub user_id_list: Vec<String>,
    }
}

impl BatchUnsuspendUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchUnsuspendUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .operation("unsuspend")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchUnsuspendUser"))
    }
}

shape! {
    pub struct InviteUsersInput => InviteUsersInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The user email addresses to which to send the email invitation.
        pub user_email_list: Vec<String>,
        pub user_type: UserType,
    }
}

impl InviteUsersInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::InviteUsers>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .operation("add")
            .json(self)?;
        Ok(Operation::for_service(request, "InviteUsers"))
    }
}

shape! {
    pub struct ResetPersonalPinInput => ResetPersonalPinInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub user_id: String,
    }
}

impl ResetPersonalPinInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ResetPersonalPin>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .label("UserId", self.user_id.as_ref())?
            .operation("reset-personal-pin")
            .json(self)?;
        Ok(Operation::for_service(request, "ResetPersonalPin"))
    }
}

shape! {
    pub struct LogoutUserInput => LogoutUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub user_id: String,
    }
}

impl LogoutUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::LogoutUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .label("UserId", self.user_id.as_ref())?
            .operation("logout")
            .json(self)?;
        Ok(Operation::for_service(request, "LogoutUser"))
    }
}

shape! {
    pub struct GetPhoneNumberInput => GetPhoneNumberInputBuilder {
        #[serde(skip)]
        pub phone_number_id: String,
    }
}

impl GetPhoneNumberInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::GetPhoneNumber>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("phone-numbers")
            .label("PhoneNumberId", self.phone_number_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "GetPhoneNumber"))
    }
}

shape! {
    pub struct ListPhoneNumbersInput => ListPhoneNumbersInputBuilder {
        #[serde(skip)]
        pub status: PhoneNumberStatus,
        #[serde(skip)]
        pub product_type: PhoneNumberProductType,
        /// The filter to use to limit the number of results.
        #[serde(skip)]
        pub filter_name: PhoneNumberAssociationName,
        /// The value to use for the filter.
        #[serde(skip)]
        pub filter_value: String,
        #[serde(skip)]
        pub max_results: i32,
        #[serde(skip)]
        pub next_token: String,
    }
}

impl ListPhoneNumbersInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ListPhoneNumbers>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("phone-numbers")
            .query("status", self.status.as_ref())
            .query("product-type", self.product_type.as_ref())
            .query("filter-name", self.filter_name.as_ref())
            .query("filter-value", self.filter_value.as_ref())
            .query("max-results", self.max_results.as_ref())
            .query("next-token", self.next_token.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListPhoneNumbers"))
    }
}

shape! {
    pub struct UpdatePhoneNumberInput => UpdatePhoneNumberInputBuilder {
        #[serde(skip)]
        pub phone_number_id: String,
        pub product_type: PhoneNumberProductType,
        /// The outbound calling name associated with the phone number.
        pub calling_name: String,
    }
}

impl UpdatePhoneNumberInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::UpdatePhoneNumber>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("phone-numbers")
            .label("PhoneNumberId", self.phone_number_id.as_ref())?
            .json(self)?;
        Ok(Operation::for_service(request, "UpdatePhoneNumber"))
    }
}

shape! {
    pub struct DeletePhoneNumberInput => DeletePhoneNumberInputBuilder {
        #[serde(skip)]
        pub phone_number_id: String,
    }
}

impl DeletePhoneNumberInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::DeletePhoneNumber>, BuildError> {
        let request = RequestBuilder::delete(config)
            .segment("phone-numbers")
            .label("PhoneNumberId", self.phone_number_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "DeletePhoneNumber"))
    }
}

shape! {
    pub struct BatchUpdatePhoneNumberInput => BatchUpdatePhoneNumberInputBuilder {
        /// The request containing the phone number IDs and product types or calling names to
        /// update.
        pub update_phone_number_request_items: Vec<UpdatePhoneNumberRequestItem>,
    }
}

impl BatchUpdatePhoneNumberInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchUpdatePhoneNumber>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("phone-numbers")
            .operation("batch-update")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchUpdatePhoneNumber"))
    }
}

shape! {
    pub struct BatchDeletePhoneNumberInput => BatchDeletePhoneNumberInputBuilder {
        /// List of phone number IDs.
        pub phone_number_ids: Vec<String>,
    }
}

impl BatchDeletePhoneNumberInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchDeletePhoneNumber>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("phone-numbers")
            .operation("batch-delete")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchDeletePhoneNumber"))
    }
}

shape! {
    pub struct AssociatePhoneNumberWithUserInput => AssociatePhoneNumberWithUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub user_id: String,
        /// The phone number, in E.164 format.
        pub e164_phone_number: String,
    }
}

impl AssociatePhoneNumberWithUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::AssociatePhoneNumberWithUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .label("UserId", self.user_id.as_ref())?
            .operation("associate-phone-number")
            .json(self)?;
        Ok(Operation::for_service(request, "AssociatePhoneNumberWithUser"))
    }
}

shape! {
    pub struct DisassociatePhoneNumberFromUserInput => DisassociatePhoneNumberFromUserInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub user_id: String,
    }
}

impl DisassociatePhoneNumberFromUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::DisassociatePhoneNumberFromUser>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("users")
            .label("UserId", self.user_id.as_ref())?
            .operation("disassociate-phone-number")
            .json(self)?;
        Ok(Operation::for_service(request, "DisassociatePhoneNumberFromUser"))
    }
}

shape! {
    pub struct CreateMeetingInput => CreateMeetingInputBuilder {
        /// The unique identifier for the client request. Use a different token for different
        /// meetings. Filled in from the configured token provider when unset.
        pub client_request_token: String,
        pub external_meeting_id: String,
        /// Reserved.
        pub meeting_host_id: String,
        /// The Region in which to create the meeting. Default: `us-east-1`.
        pub media_region: String,
        pub tags: Vec<Tag>,
        /// The configuration for resource targets to receive notifications when meeting and
        /// attendee events occur.
        pub notifications_configuration: MeetingNotificationConfiguration,
    }
}

impl CreateMeetingInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::CreateMeeting>, BuildError> {
        let mut body = self.clone();
        if body.client_request_token.is_none() {
            body.client_request_token = Some(config.make_token());
        }
        let request = RequestBuilder::post(config).segment("meetings").json(&body)?;
        Ok(Operation::for_service(request, "CreateMeeting"))
    }
}

shape! {
    pub struct GetMeetingInput => GetMeetingInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
    }
}

impl GetMeetingInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::GetMeeting>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "GetMeeting"))
    }
}

shape! {
    pub struct ListMeetingsInput => ListMeetingsInputBuilder {
        #[serde(skip)]
        pub next_token: String,
        #[serde(skip)]
        pub max_results: i32,
    }
}

impl ListMeetingsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ListMeetings>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("meetings")
            .query("next-token", self.next_token.as_ref())
            .query("max-results", self.max_results.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListMeetings"))
    }
}

shape! {
    pub struct DeleteMeetingInput => DeleteMeetingInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
    }
}

impl DeleteMeetingInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::DeleteMeeting>, BuildError> {
        let request = RequestBuilder::delete(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "DeleteMeeting"))
    }
}

shape! {
    pub struct CreateAttendeeInput => CreateAttendeeInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
        /// The Amazon Chime SDK external user ID. An idendifier of your choosing, links an
        /// attendee to an identity managed by a builder application.
        pub external_user_id: String,
        pub tags: Vec<Tag>,
    }
}

impl CreateAttendeeInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::CreateAttendee>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .segment("attendees")
            .json(self)?;
        Ok(Operation::for_service(request, "CreateAttendee"))
    }
}

shape! {
    pub struct BatchCreateAttendeeInput => BatchCreateAttendeeInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
        /// The request containing the attendees to create.
        pub attendees: Vec<CreateAttendeeRequestItem>,
    }
}

impl BatchCreateAttendeeInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchCreateAttendee>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .segment("attendees")
            .operation("batch-create")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchCreateAttendee"))
    }
}

shape! {
    pub struct GetAttendeeInput => GetAttendeeInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
        #[serde(skip)]
        pub attendee_id: String,
    }
}

impl GetAttendeeInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::GetAttendee>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .segment("attendees")
            .label("AttendeeId", self.attendee_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "GetAttendee"))
    }
}

shape! {
    pub struct ListAttendeesInput => ListAttendeesInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
        #[serde(skip)]
        pub next_token: String,
        #[serde(skip)]
        pub max_results: i32,
    }
}

impl ListAttendeesInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ListAttendees>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .segment("attendees")
            .query("next-token", self.next_token.as_ref())
            .query("max-results", self.max_results.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListAttendees"))
    }
}

shape! {
    pub struct DeleteAttendeeInput => DeleteAttendeeInputBuilder {
        #[serde(skip)]
        pub meeting_id: String,
        #[serde(skip)]
        pub attendee_id: String,
    }
}

impl DeleteAttendeeInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::DeleteAttendee>, BuildError> {
        let request = RequestBuilder::delete(config)
            .segment("meetings")
            .label("MeetingId", self.meeting_id.as_ref())?
            .segment("attendees")
            .label("AttendeeId", self.attendee_id.as_ref())?
            .empty()?;
        Ok(Operation::for_service(request, "DeleteAttendee"))
    }
}

shape! {
    pub struct CreateRoomInput => CreateRoomInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The room name.
        pub name: String,
        /// The idempotency token for the request. Filled in from the configured token provider
        /// when unset.
        pub client_request_token: String,
    }
}

impl CreateRoomInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::CreateRoom>, BuildError> {
        let mut body = self.clone();
        if body.client_request_token.is_none() {
            body.client_request_token = Some(config.make_token());
        }
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("rooms")
            .json(&body)?;
        Ok(Operation::for_service(request, "CreateRoom"))
    }
}

shape! {
    pub struct ListRoomsInput => ListRoomsInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        /// The member ID (user ID or bot ID).
        #[serde(skip)]
        pub member_id: String,
        #[serde(skip)]
        pub max_results: i32,
        #[serde(skip)]
        pub next_token: String,
    }
}

impl ListRoomsInput {
    pub fn make_operation(&self, config: &Config) -> Result<Operation<operation::ListRooms>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("rooms")
            .query("member-id", self.member_id.as_ref())
            .query("max-results", self.max_results.as_ref())
            .query("next-token", self.next_token.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListRooms"))
    }
}

shape! {
    pub struct BatchCreateRoomMembershipInput => BatchCreateRoomMembershipInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub room_id: String,
        /// The list of membership items.
        pub membership_item_list: Vec<MembershipItem>,
    }
}

impl BatchCreateRoomMembershipInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::BatchCreateRoomMembership>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("rooms")
            .label("RoomId", self.room_id.as_ref())?
            .segment("memberships")
            .operation("batch-create")
            .json(self)?;
        Ok(Operation::for_service(request, "BatchCreateRoomMembership"))
    }
}

shape! {
    pub struct ListRoomMembershipsInput => ListRoomMembershipsInputBuilder {
        #[serde(skip)]
        pub account_id: String,
        #[serde(skip)]
        pub room_id: String,
        #[serde(skip)]
        pub max_results: i32,
        #[serde(skip)]
        pub next_token: String,
    }
}

impl ListRoomMembershipsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ListRoomMemberships>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("accounts")
            .label("AccountId", self.account_id.as_ref())?
            .segment("rooms")
            .label("RoomId", self.room_id.as_ref())?
            .segment("memberships")
            .query("max-results", self.max_results.as_ref())
            .query("next-token", self.next_token.as_ref())
            .empty()?;
        Ok(Operation::for_service(request, "ListRoomMemberships"))
    }
}

shape! {
    pub struct PutVoiceConnectorTerminationCredentialsInput => PutVoiceConnectorTerminationCredentialsInputBuilder {
        #[serde(skip)]
        pub voice_connector_id: String,
        /// The termination SIP credentials.
        pub credentials: Vec<Credential>,
    }
}

impl PutVoiceConnectorTerminationCredentialsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::PutVoiceConnectorTerminationCredentials>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("voice-connectors")
            .label("VoiceConnectorId", self.voice_connector_id.as_ref())?
            .segment("termination")
            .segment("credentials")
            .operation("put")
            .json(self)?;
        Ok(Operation::for_service(
            request,
            "PutVoiceConnectorTerminationCredentials",
        ))
    }
}

shape! {
    pub struct ListVoiceConnectorTerminationCredentialsInput => ListVoiceConnectorTerminationCredentialsInputBuilder {
        #[serde(skip)]
        pub voice_connector_id: String,
    }
}

impl ListVoiceConnectorTerminationCredentialsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::ListVoiceConnectorTerminationCredentials>, BuildError> {
        let request = RequestBuilder::get(config)
            .segment("voice-connectors")
            .label("VoiceConnectorId", self.voice_connector_id.as_ref())?
            .segment("termination")
            .segment("credentials")
            .empty()?;
        Ok(Operation::for_service(
            request,
            "ListVoiceConnectorTerminationCredentials",
        ))
    }
}

shape! {
    pub struct DeleteVoiceConnectorTerminationCredentialsInput => DeleteVoiceConnectorTerminationCredentialsInputBuilder {
        #[serde(skip)]
        pub voice_connector_id: String,
        /// The RFC2617 compliant username associated with the SIP credentials, in US-ASCII format.
        pub usernames: Vec<String>,
    }
}

impl DeleteVoiceConnectorTerminationCredentialsInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<operation::DeleteVoiceConnectorTerminationCredentials>, BuildError> {
        let request = RequestBuilder::post(config)
            .segment("voice-connectors")
            .label("VoiceConnectorId", self.voice_connector_id.as_ref())?
            .segment("termination")
            .segment("credentials")
            .operation("delete")
            .json(self)?;
        Ok(Operation::for_service(
            request,
            "DeleteVoiceConnectorTerminationCredentials",
        ))
    }
}
