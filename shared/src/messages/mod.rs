// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

pub mod user;
pub mod user_register;

/// Envelope the account API wraps around every successful response
#[derive(Debug, Deserialize, Serialize)]
pub struct SuccessResponse<T> {
	pub message: String,
	pub data: T,
}

/// Envelope the account API wraps around error responses. The data is only present for errors that carry
/// structured details, such as validation rejections.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse<T> {
	pub message: String,
	pub data: Option<T>,
}
