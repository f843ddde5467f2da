/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shapes shared between the Amazon Chime operations.
//!
//! None of these types validate their contents: the documented patterns (E.164 phone numbers,
//! UUID-shaped ids, length limits) are enforced by the service, not by the setters.

use aws_smithy_types::DateTime;

string_enum! {
    /// The type of an Amazon Chime account.
    pub enum AccountType {
        Team = "Team",
        EnterpriseDirectory = "EnterpriseDirectory",
        EnterpriseLwa = "EnterpriseLWA",
        EnterpriseOidc = "EnterpriseOIDC",
    }
}

string_enum! {
    pub enum AccountStatus {
        Suspended = "Suspended",
        Active = "Active",
    }
}

string_enum! {
    /// The license assigned to a user.
    pub enum License {
        Basic = "Basic",
        Plus = "Plus",
        Pro = "Pro",
        ProTrial = "ProTrial",
    }
}

string_enum! {
    pub enum UserType {
        PrivateUser = "PrivateUser",
        SharedDevice = "SharedDevice",
    }
}

string_enum! {
    pub enum RegistrationStatus {
        Unregistered = "Unregistered",
        Registered = "Registered",
        Suspended = "Suspended",
    }
}

string_enum! {
    pub enum InviteStatus {
        Pending = "Pending",
        Accepted = "Accepted",
        Failed = "Failed",
    }
}

string_enum! {
    pub enum EmailStatus {
        NotSent = "NotSent",
        Sent = "Sent",
        Failed = "Failed",
    }
}

string_enum! {
    /// The reason an item of a batch operation failed.
    pub enum ErrorCode {
        BadRequest = "BadRequest",
        Conflict = "Conflict",
        Forbidden = "Forbidden",
        NotFound = "NotFound",
        PreconditionFailed = "PreconditionFailed",
        ResourceLimitExceeded = "ResourceLimitExceeded",
        ServiceFailure = "ServiceFailure",
        AccessDenied = "AccessDenied",
        ServiceUnavailable = "ServiceUnavailable",
        Throttled = "Throttled",
        Throttling = "Throttling",
        Unauthorized = "Unauthorized",
        Unprocessable = "Unprocessable",
        VoiceConnectorGroupAssociationsExist = "VoiceConnectorGroupAssociationsExist",
        PhoneNumberAssociationsExist = "PhoneNumberAssociationsExist",
    }
}

string_enum! {
    /// What a phone number is associated with.
    pub enum PhoneNumberAssociationName {
        AccountId = "AccountId",
        UserId = "UserId",
        VoiceConnectorId = "VoiceConnectorId",
        VoiceConnectorGroupId = "VoiceConnectorGroupId",
        SipRuleId = "SipRuleId",
    }
}

string_enum! {
    pub enum PhoneNumberProductType {
        BusinessCalling = "BusinessCalling",
        VoiceConnector = "VoiceConnector",
        SipMediaApplicationDialIn = "SipMediaApplicationDialIn",
    }
}

string_enum! {
    pub enum PhoneNumberStatus {
        AcquireInProgress = "AcquireInProgress",
        AcquireFailed = "AcquireFailed",
        Unassigned = "Unassigned",
        Assigned = "Assigned",
        ReleaseInProgress = "ReleaseInProgress",
        DeleteInProgress = "DeleteInProgress",
        ReleaseFailed = "ReleaseFailed",
        DeleteFailed = "DeleteFailed",
    }
}

string_enum! {
    pub enum PhoneNumberType {
        Local = "Local",
        TollFree = "TollFree",
    }
}

string_enum! {
    pub enum CallingNameStatus {
        Unassigned = "Unassigned",
        UpdateInProgress = "UpdateInProgress",
        UpdateSucceeded = "UpdateSucceeded",
        UpdateFailed = "UpdateFailed",
    }
}

string_enum! {
    pub enum MemberType {
        User = "User",
        Bot = "Bot",
        Webhook = "Webhook",
    }
}

string_enum! {
    pub enum RoomMembershipRole {
        Administrator = "Administrator",
        Member = "Member",
    }
}

shape! {
    /// The Amazon Chime account details. An AWS account can have multiple Amazon Chime accounts.
    pub struct Account => AccountBuilder {
        /// The AWS account ID.
        pub aws_account_id: String,
        /// The Amazon Chime account ID.
        pub account_id: String,
        /// The Amazon Chime account name.
        pub name: String,
        pub account_type: AccountType,
        #[serde(with = "crate::date_time_iso8601")]
        pub created_timestamp: DateTime,
        /// The default license for the Amazon Chime account.
        pub default_license: License,
        /// Supported licenses for the Amazon Chime account.
        pub supported_licenses: Vec<License>,
        pub account_status: AccountStatus,
        /// The sign-in delegate groups associated with the account.
        pub signin_delegate_groups: Vec<SigninDelegateGroup>,
    }
}

shape! {
    /// An Active Directory group whose members are granted a license on sign-in.
    pub struct SigninDelegateGroup => SigninDelegateGroupBuilder {
        pub group_name: String,
    }
}

shape! {
    /// The user on the Amazon Chime account.
    pub struct User => UserBuilder {
        pub user_id: String,
        pub account_id: String,
        /// The primary email address of the user.
        pub primary_email: String,
        /// The primary phone number associated with the user, in E.164 format.
        pub primary_provisioned_number: String,
        pub display_name: String,
        pub license_type: License,
        pub user_type: UserType,
        pub user_registration_status: RegistrationStatus,
        pub user_invitation_status: InviteStatus,
        #[serde(with = "crate::date_time_iso8601")]
        pub registered_on: DateTime,
        #[serde(with = "crate::date_time_iso8601")]
        pub invited_on: DateTime,
        pub alexa_for_business_metadata: AlexaForBusinessMetadata,
        /// The user's personal meeting PIN.
        #[serde(rename = "PersonalPIN")]
        pub personal_pin: String,
    }
}

shape! {
    /// The Alexa for Business metadata associated with an Amazon Chime user.
    pub struct AlexaForBusinessMetadata => AlexaForBusinessMetadataBuilder {
        pub is_alexa_for_business_enabled: bool,
        pub alexa_for_business_room_arn: String,
    }
}

shape! {
    /// The user ID and user fields to update, used with `BatchUpdateUser`.
    pub struct UpdateUserRequestItem => UpdateUserRequestItemBuilder {
        pub user_id: String,
        pub license_type: License,
        pub user_type: UserType,
        pub alexa_for_business_metadata: AlexaForBusinessMetadata,
    }
}

shape! {
    /// The list of errors returned when errors are encountered during the `BatchSuspendUser`,
    /// `BatchUnsuspendUser`, or `BatchUpdateUser` actions.
    pub struct UserError => UserErrorBuilder {
        pub user_id: String,
        pub error_code: ErrorCode,
        pub error_message: String,
    }
}

shape! {
    /// Invitation object returned after emailing users to invite them to join the Amazon Chime
    /// Team account.
    pub struct Invite => InviteBuilder {
        pub invite_id: String,
        pub status: InviteStatus,
        pub email_address: String,
        pub email_status: EmailStatus,
    }
}

shape! {
    /// A phone number used for Amazon Chime Business Calling or an Amazon Chime Voice Connector.
    pub struct PhoneNumber => PhoneNumberBuilder {
        pub phone_number_id: String,
        /// The phone number, in E.164 format.
        pub e164_phone_number: String,
        pub country: String,
        #[serde(rename = "Type")]
        pub phone_number_type: PhoneNumberType,
        pub product_type: PhoneNumberProductType,
        pub status: PhoneNumberStatus,
        pub capabilities: PhoneNumberCapabilities,
        /// The phone number associations.
        pub associations: Vec<PhoneNumberAssociation>,
        /// The outbound calling name associated with the phone number.
        pub calling_name: String,
        pub calling_name_status: CallingNameStatus,
        #[serde(with = "crate::date_time_iso8601")]
        pub created_timestamp: DateTime,
        #[serde(with = "crate::date_time_iso8601")]
        pub updated_timestamp: DateTime,
        /// The phone number's deletion timestamp.
        #[serde(with = "crate::date_time_iso8601")]
        pub deletion_timestamp: DateTime,
    }
}

shape! {
    /// The phone number capabilities for Amazon Chime Business Calling phone numbers, such as
    /// enabled inbound and outbound calling and text messaging.
    pub struct PhoneNumberCapabilities => PhoneNumberCapabilitiesBuilder {
        pub inbound_call: bool,
        pub outbound_call: bool,
        #[serde(rename = "InboundSMS")]
        pub inbound_sms: bool,
        #[serde(rename = "OutboundSMS")]
        pub outbound_sms: bool,
        #[serde(rename = "InboundMMS")]
        pub inbound_mms: bool,
        #[serde(rename = "OutboundMMS")]
        pub outbound_mms: bool,
    }
}

shape! {
    /// The phone number associations, such as Amazon Chime account ID, Amazon Chime user ID,
    /// Amazon Chime Voice Connector ID, or Amazon Chime Voice Connector group ID.
    pub struct PhoneNumberAssociation => PhoneNumberAssociationBuilder {
        /// Contains the ID for the entity specified in `name`.
        pub value: String,
        pub name: PhoneNumberAssociationName,
        #[serde(with = "crate::date_time_iso8601")]
        pub associated_timestamp: DateTime,
    }
}

shape! {
    /// If the phone number action fails for one or more of the phone numbers in the request, a
    /// list of the phone numbers is returned, along with error codes and error messages.
    pub struct PhoneNumberError => PhoneNumberErrorBuilder {
        pub phone_number_id: String,
        pub error_code: ErrorCode,
        pub error_message: String,
    }
}

shape! {
    /// The phone number ID, product type, or calling name fields to update, used with
    /// `BatchUpdatePhoneNumber`.
    pub struct UpdatePhoneNumberRequestItem => UpdatePhoneNumberRequestItemBuilder {
        pub phone_number_id: String,
        pub product_type: PhoneNumberProductType,
        pub calling_name: String,
    }
}

shape! {
    /// A meeting created using the Amazon Chime SDK.
    pub struct Meeting => MeetingBuilder {
        pub meeting_id: String,
        /// The external meeting ID.
        pub external_meeting_id: String,
        pub media_placement: MediaPlacement,
        /// The Region in which you create the meeting, e.g. `us-east-1`.
        pub media_region: String,
    }
}

shape! {
    /// A set of endpoints used by clients to connect to the media service group for a meeting.
    pub struct MediaPlacement => MediaPlacementBuilder {
        pub audio_host_url: String,
        pub audio_fallback_url: String,
        pub screen_data_url: String,
        pub screen_sharing_url: String,
        pub screen_viewing_url: String,
        pub signaling_url: String,
        pub turn_control_url: String,
        pub event_ingestion_url: String,
    }
}

shape! {
    /// The resource target configurations for receiving meeting event notifications.
    pub struct MeetingNotificationConfiguration => MeetingNotificationConfigurationBuilder {
        pub sns_topic_arn: String,
        pub sqs_queue_arn: String,
    }
}

shape! {
    /// An Amazon Chime SDK meeting attendee.
    ///
    /// `join_token` is the secret a client application passes to the Amazon Chime SDK to join
    /// the meeting.
    pub struct Attendee => AttendeeBuilder, sensitive: [join_token] {
        pub external_user_id: String,
        pub attendee_id: String,
        pub join_token: String,
    }
}

shape! {
    /// The Amazon Chime SDK attendee fields to create, used with `BatchCreateAttendee`.
    pub struct CreateAttendeeRequestItem => CreateAttendeeRequestItemBuilder {
        pub external_user_id: String,
        /// The tag key-value pairs.
        pub tags: Vec<Tag>,
    }
}

shape! {
    /// The list of errors returned when errors are encountered during the `BatchCreateAttendee`
    /// and `CreateAttendee` actions.
    pub struct CreateAttendeeError => CreateAttendeeErrorBuilder {
        pub external_user_id: String,
        pub error_code: ErrorCode,
        pub error_message: String,
    }
}

shape! {
    /// The Amazon Chime chat room details.
    pub struct Room => RoomBuilder {
        pub room_id: String,
        pub name: String,
        pub account_id: String,
        /// The identifier of the room creator.
        pub created_by: String,
        #[serde(with = "crate::date_time_iso8601")]
        pub created_timestamp: DateTime,
        #[serde(with = "crate::date_time_iso8601")]
        pub updated_timestamp: DateTime,
    }
}

shape! {
    /// The member details, such as email address, name, member ID, and member type.
    pub struct Member => MemberBuilder {
        pub member_id: String,
        pub member_type: MemberType,
        pub email: String,
        pub full_name: String,
        pub account_id: String,
    }
}

shape! {
    /// Membership details, such as member ID and member role.
    pub struct MembershipItem => MembershipItemBuilder {
        pub member_id: String,
        pub role: RoomMembershipRole,
    }
}

shape! {
    /// The list of errors returned when a member action results in an error.
    pub struct MemberError => MemberErrorBuilder {
        pub member_id: String,
        pub error_code: ErrorCode,
        pub error_message: String,
    }
}

shape! {
    /// The room membership details.
    pub struct RoomMembership => RoomMembershipBuilder {
        pub room_id: String,
        pub member: Member,
        pub role: RoomMembershipRole,
        /// The identifier of the user that invited the room member.
        pub invited_by: String,
        #[serde(with = "crate::date_time_iso8601")]
        pub updated_timestamp: DateTime,
    }
}

shape! {
    /// Describes a tag applied to a resource.
    pub struct Tag => TagBuilder {
        pub key: String,
        pub value: String,
    }
}

shape! {
    /// The SIP credentials used to authenticate requests to an Amazon Chime Voice Connector.
    pub struct Credential => CredentialBuilder, sensitive: [password] {
        /// The RFC2617 compliant user name associated with the SIP credentials.
        pub username: String,
        /// The RFC2617 compliant password associated with the SIP credentials.
        pub password: String,
    }
}

impl Credential {
    /// Creates a credential from a user name and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn enum_values_round_trip() {
        macro_rules! check {
            ($($ty:ty),+) => {
                $(
                    for value in <$ty>::values() {
                        let parsed: $ty = value.parse().expect("known value");
                        assert_eq!(parsed.as_str(), *value);
                        assert_eq!(parsed.to_string(), *value);
                    }
                )+
            };
        }
        check!(
            AccountType,
            AccountStatus,
            License,
            UserType,
            RegistrationStatus,
            InviteStatus,
            EmailStatus,
            ErrorCode,
            PhoneNumberAssociationName,
            PhoneNumberProductType,
            PhoneNumberStatus,
            PhoneNumberType,
            CallingNameStatus,
            MemberType,
            RoomMembershipRole
        );
    }

    #[test]
    fn enum_wire_values_differ_from_variant_names() {
        assert_eq!(AccountType::EnterpriseLwa.as_str(), "EnterpriseLWA");
        assert_eq!(
            "EnterpriseOIDC".parse::<AccountType>(),
            Ok(AccountType::EnterpriseOidc)
        );
        assert!("EnterpriseOidc".parse::<AccountType>().is_err());
    }

    #[test]
    fn unknown_enum_value_is_rejected_by_from_str() {
        assert!("Gold".parse::<License>().is_err());
        assert!(UserType::try_from("privateuser").is_err());
        assert!(UserType::try_from("Robot").is_err());
    }

    #[test]
    fn unknown_enum_value_from_the_service_is_kept() {
        let user: User = serde_json::from_str(r#"{"UserType":"Robot","LicenseType":"Pro"}"#).unwrap();
        assert_eq!(user.user_type, Some(UserType::Unknown("Robot".to_owned())));
        assert_eq!(user.license_type, Some(License::Pro));
        let user_type = user.user_type.as_ref().unwrap();
        assert_eq!(user_type.as_str(), "Robot");
        assert_eq!(user_type.to_string(), "Robot");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"LicenseType": "Pro", "UserType": "Robot"})
        );
        assert_eq!(UserType::from_wire("SharedDevice"), UserType::SharedDevice);
        assert!(!UserType::values().contains(&"Robot"));
    }

    #[test]
    fn error_code_vocabulary() {
        assert_eq!(ErrorCode::values().len(), 15);
        assert_eq!(
            ErrorCode::PhoneNumberAssociationsExist.to_string(),
            "PhoneNumberAssociationsExist"
        );
    }

    #[test]
    fn builder_sets_each_field() {
        let tag = Tag::builder().key("team").value("blue").build();
        assert_eq!(tag.key.as_deref(), Some("team"));
        assert_eq!(tag.value.as_deref(), Some("blue"));
        assert_eq!(Tag::builder().build(), Tag::default());
    }

    #[test]
    fn empty_string_is_distinct_from_unset() {
        let empty = SigninDelegateGroup::builder().group_name("").build();
        assert_ne!(empty, SigninDelegateGroup::default());
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"GroupName":""}"#);
        assert_eq!(
            serde_json::to_string(&SigninDelegateGroup::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn equality_is_field_wise() {
        let a = Member::builder()
            .member_id("m-1")
            .member_type(MemberType::User)
            .build();
        let b = a.clone();
        let c = Member::builder()
            .member_id("m-1")
            .member_type(MemberType::Bot)
            .build();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_equality_is_order_sensitive() {
        let blue = Tag::builder().key("team").value("blue").build();
        let red = Tag::builder().key("team").value("red").build();
        let forward = CreateAttendeeRequestItem::builder()
            .tags(vec![blue.clone(), red.clone()])
            .build();
        let backward = CreateAttendeeRequestItem::builder()
            .tags(vec![red, blue])
            .build();
        assert_ne!(forward, backward);
    }

    #[test]
    fn equal_shapes_dedupe_in_a_set() {
        let attendee = || {
            Attendee::builder()
                .attendee_id("a-1")
                .external_user_id("alice")
                .build()
        };
        let set: HashSet<Attendee> = vec![attendee(), attendee()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn debug_skips_unset_fields_in_declared_order() {
        let user = User::builder()
            .user_type(UserType::PrivateUser)
            .user_id("u-1")
            .display_name("Alice")
            .build();
        assert_eq!(
            format!("{:?}", user),
            r#"User { user_id: "u-1", display_name: "Alice", user_type: PrivateUser }"#
        );
        assert_eq!(format!("{:?}", User::default()), "User");
    }

    #[test]
    fn credential_debug_redacts_password() {
        let credential = Credential::new("sip-user", "hunter2");
        let rendered = format!("{:?}", credential);
        assert_eq!(
            rendered,
            r#"Credential { username: "sip-user", password: "*** Sensitive Data Redacted ***" }"#
        );
        assert!(!format!("{:?}", Credential::builder().password("hunter2")).contains("hunter2"));
        assert_eq!(format!("{:?}", Credential::builder().username("u").build()), r#"Credential { username: "u" }"#);
    }

    #[test]
    fn attendee_debug_redacts_join_token() {
        let attendee = Attendee::builder()
            .attendee_id("a-1")
            .join_token("secret-token")
            .build();
        let rendered = format!("{:?}", attendee);
        assert!(!rendered.contains("secret-token"), "{}", rendered);
        assert_eq!(
            rendered,
            r#"Attendee { attendee_id: "a-1", join_token: "*** Sensitive Data Redacted ***" }"#
        );
        assert_eq!(attendee.join_token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn set_forwards_an_optional_value() {
        let region: Option<String> = None;
        let meeting = Meeting::builder()
            .meeting_id("m-1")
            .set_media_region(region)
            .set_external_meeting_id(Some("standup".to_owned()))
            .build();
        assert_eq!(meeting.media_region, None);
        assert_eq!(meeting.external_meeting_id.as_deref(), Some("standup"));
        let cleared = Tag::builder().key("team").set_key(None).build();
        assert_eq!(cleared, Tag::default());
    }

    #[test]
    fn phone_number_uses_service_member_names() {
        let json = r#"{
            "PhoneNumberId": "%2B12065550100",
            "E164PhoneNumber": "+12065550100",
            "Type": "Local",
            "ProductType": "BusinessCalling",
            "Status": "Assigned",
            "Capabilities": {"InboundCall": true, "OutboundSMS": false},
            "Associations": [
                {"Value": "u-1", "Name": "UserId", "AssociatedTimestamp": "2020-01-02T03:04:05Z"}
            ],
            "CreatedTimestamp": "2020-01-01T00:00:00.000Z"
        }"#;
        let number: PhoneNumber = serde_json::from_str(json).unwrap();
        assert_eq!(number.phone_number_type, Some(PhoneNumberType::Local));
        assert_eq!(number.status, Some(PhoneNumberStatus::Assigned));
        let capabilities = number.capabilities.as_ref().unwrap();
        assert_eq!(capabilities.inbound_call, Some(true));
        assert_eq!(capabilities.outbound_sms, Some(false));
        assert_eq!(capabilities.inbound_sms, None);
        let association = &number.associations.as_ref().unwrap()[0];
        assert_eq!(association.name, Some(PhoneNumberAssociationName::UserId));
        assert_eq!(
            association.associated_timestamp,
            Some(DateTime::from_secs(1577934245))
        );
        assert_eq!(
            number.created_timestamp,
            Some(DateTime::from_secs(1577836800))
        );
    }

    #[test]
    fn user_personal_pin_member_name() {
        let user = User::builder().personal_pin("1234").build();
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"PersonalPIN": "1234"})
        );
    }
}
