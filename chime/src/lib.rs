/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types and REST-JSON operations for the Amazon Chime client SDK.
//!
//! Every operation has an `<Op>Input` in [`input`] and an `<Op>Output` in [`output`]. An input
//! becomes a request with `make_operation`, and a [`Client`] sends it:
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), chime::SdkError<chime::Error>> {
//! use chime::input::GetAccountInput;
//! use chime::test_connection::TestConnection;
//!
//! let conn = TestConnection::<&'static str>::new(vec![]);
//! let client = chime::Client::from_conf_conn(chime::Config::from_env(), conn);
//! let operation = GetAccountInput::builder()
//!     .account_id("acct-1")
//!     .build()
//!     .make_operation(client.conf())
//!     .map_err(|err| chime::SdkError::ConstructionFailure(err.into()))?;
//! let account = client.call(operation).await?.account;
//! # let _ = account;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod batch;
mod client;
pub mod config;
mod date_time_iso8601;
pub mod error;
pub mod idempotency_token;
pub mod input;
mod json_errors;
pub mod model;
pub mod operation;
pub mod output;
pub mod paginator;
mod request;
pub mod response;
mod result;
pub mod test_connection;
mod uri_encode;

pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use result::{SdkError, SdkSuccess};
