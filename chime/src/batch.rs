/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Partial failures of batch operations.
//!
//! A batch call that returns successfully may still have failed for some of its items. Those
//! items come back as per-item error records; everything else in the request succeeded.

use crate::model::{
    Attendee, CreateAttendeeError, ErrorCode, MemberError, PhoneNumberError, UserError,
};
use crate::output::{
    BatchCreateAttendeeOutput, BatchCreateRoomMembershipOutput, BatchDeletePhoneNumberOutput,
    BatchSuspendUserOutput, BatchUnsuspendUserOutput, BatchUpdatePhoneNumberOutput,
    BatchUpdateUserOutput,
};

/// A record describing why one item of a batch request failed.
pub trait BatchItemError {
    /// The identifier of the failed item as it appeared in the request.
    fn item_id(&self) -> Option<&str>;
    fn error_code(&self) -> Option<&ErrorCode>;
    fn error_message(&self) -> Option<&str>;
}

macro_rules! batch_item_error {
    ($($shape:ident => $id:ident,)+) => {
        $(
            impl BatchItemError for $shape {
                fn item_id(&self) -> Option<&str> {
                    self.$id.as_deref()
                }

                fn error_code(&self) -> Option<&ErrorCode> {
                    self.error_code.as_ref()
                }

                fn error_message(&self) -> Option<&str> {
                    self.error_message.as_deref()
                }
            }
        )+
    };
}

batch_item_error! {
    UserError => user_id,
    PhoneNumberError => phone_number_id,
    CreateAttendeeError => external_user_id,
    MemberError => member_id,
}

/// The succeeded and failed items of a batch result.
#[derive(Debug, PartialEq, Eq)]
pub struct BatchOutcome<'a, S, E> {
    pub succeeded: &'a [S],
    pub failed: &'a [E],
}

impl<'a, S, E> BatchOutcome<'a, S, E> {
    /// Returns `true` when no item failed.
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<'a, S, E: BatchItemError> BatchOutcome<'a, S, E> {
    /// The identifiers of the failed items, in the order the service reported them.
    pub fn failed_ids(&self) -> Vec<&'a str> {
        self.failed.iter().filter_map(|failure| failure.item_id()).collect()
    }
}

fn slice<T>(list: &Option<Vec<T>>) -> &[T] {
    list.as_deref().unwrap_or_default()
}

macro_rules! failures_only {
    ($($output:ident => $field:ident: $error:ident,)+) => {
        $(
            impl $output {
                /// The per-item failures. An unset list means every item succeeded.
                pub fn failures(&self) -> &[$error] {
                    slice(&self.$field)
                }

                /// The identifiers of the items that failed.
                pub fn failed_ids(&self) -> Vec<&str> {
                    self.failures().iter().filter_map(|failure| failure.item_id()).collect()
                }

                pub fn is_complete_success(&self) -> bool {
                    self.failures().is_empty()
                }
            }
        )+
    };
}

failures_only! {
    BatchUpdateUserOutput => user_errors: UserError,
    BatchSuspendUserOutput => user_errors: UserError,
    BatchUnsuspendUserOutput => user_errors: UserError,
    BatchUpdatePhoneNumberOutput => phone_number_errors: PhoneNumberError,
    BatchDeletePhoneNumberOutput => phone_number_errors: PhoneNumberError,
    BatchCreateRoomMembershipOutput => errors: MemberError,
}

impl BatchCreateAttendeeOutput {
    /// Splits the result into the attendees that were created and those that were not.
    pub fn outcome(&self) -> BatchOutcome<'_, Attendee, CreateAttendeeError> {
        BatchOutcome {
            succeeded: slice(&self.attendees),
            failed: slice(&self.errors),
        }
    }

    pub fn failures(&self) -> &[CreateAttendeeError] {
        slice(&self.errors)
    }

    pub fn failed_ids(&self) -> Vec<&str> {
        self.outcome().failed_ids()
    }

    pub fn is_complete_success(&self) -> bool {
        self.outcome().is_complete_success()
    }
}
