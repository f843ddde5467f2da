/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use chime::error::BuildError;
use chime::input::{CreateUserInput, DeleteMeetingInput, GetUserInput};
use chime::model::{
    Account, AccountStatus, AccountType, License, Meeting, MediaPlacement, UserType,
};
use chime::Config;
use percent_encoding::percent_decode_str;
use proptest::prelude::*;

#[test]
fn create_user_input_debug_lists_set_fields_in_order() {
    let input = CreateUserInput::builder()
        .account_id("acct-1")
        .username("alice")
        .email("alice@example.com")
        .user_type(UserType::PrivateUser)
        .build();
    let rendered = format!("{:?}", input);
    let positions: Vec<usize> = [
        r#"account_id: "acct-1""#,
        r#"username: "alice""#,
        r#"email: "alice@example.com""#,
        "user_type: PrivateUser",
    ]
    .iter()
    .map(|needle| rendered.find(needle).expect(needle))
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn account_round_trips_through_service_json() {
    let json = r#"{
        "AwsAccountId": "123456789012",
        "AccountId": "12a3456b-7c89-012d-3456-78901e23fg45",
        "Name": "Example",
        "AccountType": "EnterpriseOIDC",
        "CreatedTimestamp": "2019-12-16T23:48:18Z",
        "DefaultLicense": "Pro",
        "SupportedLicenses": ["Basic", "Pro"],
        "AccountStatus": "Active",
        "SigninDelegateGroups": [{"GroupName": "admins"}]
    }"#;
    let account: Account = serde_json::from_str(json).unwrap();
    assert_eq!(account.account_type, Some(AccountType::EnterpriseOidc));
    assert_eq!(account.account_status, Some(AccountStatus::Active));
    assert_eq!(
        account.supported_licenses,
        Some(vec![License::Basic, License::Pro])
    );
    let reparsed: Account =
        serde_json::from_str(&serde_json::to_string(&account).unwrap()).unwrap();
    assert_eq!(reparsed, account);
}

#[test]
fn unset_nested_shapes_stay_unset() {
    let meeting = Meeting::builder()
        .meeting_id("m-1")
        .media_placement(MediaPlacement::builder().build())
        .build();
    assert_eq!(
        serde_json::to_value(&meeting).unwrap(),
        serde_json::json!({"MeetingId": "m-1", "MediaPlacement": {}})
    );
    assert_eq!(meeting.media_region, None);
}

#[test]
fn unset_label_never_reaches_the_wire() {
    let err = DeleteMeetingInput::default()
        .make_operation(&Config::builder().build())
        .unwrap_err();
    assert!(matches!(err, BuildError::MissingField { field: "MeetingId", .. }));
    assert_eq!(
        err.to_string(),
        "`MeetingId` was missing: cannot be empty or unset"
    );
}

proptest! {
    #[test]
    fn user_id_stays_inside_its_segment(user_id in "\\PC+") {
        let op = GetUserInput::builder()
            .account_id("acct-1")
            .user_id(user_id.clone())
            .build()
            .make_operation(&Config::builder().build())
            .unwrap();
        let path = op.request().uri().path().to_string();
        let segments: Vec<&str> = path.split('/').collect();
        prop_assert_eq!(segments.len(), 5);
        prop_assert_eq!(segments[1], "accounts");
        prop_assert_eq!(segments[3], "users");
        let decoded = percent_decode_str(segments[4]).decode_utf8().unwrap();
        prop_assert_eq!(&*decoded, user_id.as_str());
    }
}
