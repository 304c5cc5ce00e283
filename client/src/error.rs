// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::user_register::FieldErrors;
use std::fmt;

/// Errors that can occur when asking the server to create an account
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegisterError {
	/// The request couldn't be sent or the response couldn't be read
	Transport(String),
	/// The server rejected the submitted data (HTTP 422). Field errors are missing when the response didn't
	/// include them in the expected shape.
	ValidationRejected {
		message: String,
		field_errors: Option<FieldErrors>,
	},
	/// The server responded with any other failure status
	Http { status: u16, body: String },
	/// The server reported success but the response couldn't be understood
	MalformedResponse(String),
}

impl From<gloo_net::Error> for RegisterError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Transport(error.to_string())
	}
}

impl fmt::Display for RegisterError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "Failed to communicate with the server: {}", error),
			Self::ValidationRejected { message, .. } => write!(f, "The server rejected the registration: {}", message),
			Self::Http { status, body } => write!(f, "The server responded with status {}: {}", status, body),
			Self::MalformedResponse(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}
