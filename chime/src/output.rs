/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Results of the Amazon Chime operations.

use crate::model::{
    Account, Attendee, CreateAttendeeError, Invite, Meeting, MemberError, PhoneNumber,
    PhoneNumberError, Room, RoomMembership, User, UserError,
};

shape! {
    pub struct CreateAccountOutput => CreateAccountOutputBuilder {
        pub account: Account,
    }
}

shape! {
    pub struct GetAccountOutput => GetAccountOutputBuilder {
        pub account: Account,
    }
}

shape! {
    pub struct UpdateAccountOutput => UpdateAccountOutputBuilder {
        pub account: Account,
    }
}

shape! {
    pub struct DeleteAccountOutput => DeleteAccountOutputBuilder {}
}

shape! {
    pub struct ListAccountsOutput => ListAccountsOutputBuilder {
        /// The list of Amazon Chime accounts.
        pub accounts: Vec<Account>,
        /// The token to use to retrieve the next page of results.
        pub next_token: String,
    }
}

shape! {
    pub struct CreateUserOutput => CreateUserOutputBuilder {
        pub user: User,
    }
}

shape! {
    pub struct GetUserOutput => GetUserOutputBuilder {
        pub user: User,
    }
}

shape! {
    pub struct UpdateUserOutput => UpdateUserOutputBuilder {
        pub user: User,
    }
}

shape! {
    pub struct ListUsersOutput => ListUsersOutputBuilder {
        pub users: Vec<User>,
        pub next_token: String,
    }
}

shape! {
    pub struct BatchUpdateUserOutput => BatchUpdateUserOutputBuilder {
        /// The users whose update failed. Users left out of this list were updated.
        pub user_errors: Vec<UserError>,
    }
}

shape! {
    pub struct BatchSuspendUserOutput => BatchSuspendUserOutputBuilder {
        pub user_errors: Vec<UserError>,
    }
}

shape! {
    pub struct BatchUnsuspendUserOutput => BatchUnsuspendUserOutputBuilder {
        pub user_errors: Vec<UserError>,
    }
}

shape! {
    pub struct InviteUsersOutput => InviteUsersOutputBuilder {
        /// The email invitation details.
        pub invites: Vec<Invite>,
    }
}

shape! {
    pub struct ResetPersonalPinOutput => ResetPersonalPinOutputBuilder {
        /// The user details and new personal meeting PIN.
        pub user: User,
    }
}

shape! {
    pub struct LogoutUserOutput => LogoutUserOutputBuilder {}
}

shape! {
    pub struct GetPhoneNumberOutput => GetPhoneNumberOutputBuilder {
        pub phone_number: PhoneNumber,
    }
}

shape! {
    pub struct ListPhoneNumbersOutput => ListPhoneNumbersOutputBuilder {
        pub phone_numbers: Vec<PhoneNumber>,
        pub next_token: String,
    }
}

shape! {
    pub struct UpdatePhoneNumberOutput => UpdatePhoneNumberOutputBuilder {
        pub phone_number: PhoneNumber,
    }
}

shape! {
    pub struct DeletePhoneNumberOutput => DeletePhoneNumberOutputBuilder {}
}

shape! {
    pub struct BatchUpdatePhoneNumberOutput => BatchUpdatePhoneNumberOutputBuilder {
        pub phone_number_errors: Vec<PhoneNumberError>,
    }
}

shape! {
    pub struct BatchDeletePhoneNumberOutput => BatchDeletePhoneNumberOutputBuilder {
        pub phone_number_errors: Vec<PhoneNumberError>,
    }
}

shape! {
    pub struct AssociatePhoneNumberWithUserOutput => AssociatePhoneNumberWithUserOutputBuilder {}
}

shape! {
    pub struct DisassociatePhoneNumberFromUserOutput => DisassociatePhoneNumberFromUserOutputBuilder {}
}

shape! {
    pub struct CreateMeetingOutput => CreateMeetingOutputBuilder {
        /// The meeting information, including the meeting ID and `MediaPlacement`.
        pub meeting: Meeting,
    }
}

shape! {
    pub struct GetMeetingOutput => GetMeetingOutputBuilder {
        pub meeting: Meeting,
    }
}

shape! {
    pub struct ListMeetingsOutput => ListMeetingsOutputBuilder {
        pub meetings: Vec<Meeting>,
        pub next_token: String,
    }
}

shape! {
    pub struct DeleteMeetingOutput => DeleteMeetingOutputBuilder {}
}

shape! {
    pub struct CreateAttendeeOutput => CreateAttendeeOutputBuilder {
        /// The attendee information, including attendee ID and join token.
        pub attendee: Attendee,
    }
}

shape! {
    pub struct BatchCreateAttendeeOutput => BatchCreateAttendeeOutputBuilder {
        /// The attendees that were created.
        pub attendees: Vec<Attendee>,
        /// The attendees that could not be created.
        pub errors: Vec<CreateAttendeeError>,
    }
}

shape! {
    pub struct GetAttendeeOutput => GetAttendeeOutputBuilder {
        pub attendee: Attendee,
    }
}

shape! {
    pub struct ListAttendeesOutput => ListAttendeesOutputBuilder {
        pub attendees: Vec<Attendee>,
        pub next_token: String,
    }
}

shape! {
    pub struct DeleteAttendeeOutput => DeleteAttendeeOutputBuilder {}
}

shape! {
    pub struct CreateRoomOutput => CreateRoomOutputBuilder {
        pub room: Room,
    }
}

shape! {
    pub struct ListRoomsOutput => ListRoomsOutputBuilder {
        pub rooms: Vec<Room>,
        pub next_token: String,
    }
}

shape! {
    pub struct BatchCreateRoomMembershipOutput => BatchCreateRoomMembershipOutputBuilder {
        /// If the action fails for one or more of the member IDs in the request, a list of the
        /// member IDs is returned, along with error codes and error messages.
        pub errors: Vec<MemberError>,
    }
}

shape! {
    pub struct ListRoomMembershipsOutput => ListRoomMembershipsOutputBuilder {
        pub room_memberships: Vec<RoomMembership>,
        pub next_token: String,
    }
}

shape! {
    pub struct PutVoiceConnectorTerminationCredentialsOutput => PutVoiceConnectorTerminationCredentialsOutputBuilder {}
}

shape! {
    pub struct ListVoiceConnectorTerminationCredentialsOutput => ListVoiceConnectorTerminationCredentialsOutputBuilder {
        /// A list of user names.
        pub usernames: Vec<String>,
    }
}

shape! {
    pub struct DeleteVoiceConnectorTerminationCredentialsOutput => DeleteVoiceConnectorTerminationCredentialsOutputBuilder {}
}
