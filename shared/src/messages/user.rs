// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::SuccessResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account as described by the account API
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
	#[serde(rename = "_id")]
	pub id: String,
	pub email: String,
	#[serde(default)]
	pub roles: Vec<String>,
	#[serde(rename = "createdAt")]
	pub created_at: DateTime<Utc>,
	#[serde(rename = "updatedAt")]
	pub updated_at: DateTime<Utc>,
}

/// Session data handed out when an account is created or logged in
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthData {
	pub access_token: String,
	#[serde(default)]
	pub refresh_token: Option<String>,
	/// Access token lifetime in seconds
	#[serde(default)]
	pub expires: Option<u64>,
	pub user: User,
}

pub type AuthResponse = SuccessResponse<AuthData>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_auth_response() {
		let body = r#"{
			"message": "Registered",
			"data": {
				"access_token": "Bearer abc",
				"expires": 604800,
				"user": {
					"_id": "65f0c0ffee",
					"email": "ada@example.com",
					"roles": ["User"],
					"createdAt": "2024-03-12T10:15:00.000Z",
					"updatedAt": "2024-03-12T10:15:00.000Z",
					"__v": 0
				}
			}
		}"#;

		let response: AuthResponse = serde_json::from_str(body).unwrap();
		assert_eq!(response.data.access_token, "Bearer abc");
		assert_eq!(response.data.refresh_token, None);
		assert_eq!(response.data.expires, Some(604800));
		assert_eq!(response.data.user.email, "ada@example.com");
		assert_eq!(response.data.user.roles, vec![String::from("User")]);
	}

	#[test]
	fn roles_default_to_empty() {
		let body = r#"{
			"_id": "1",
			"email": "ada@example.com",
			"createdAt": "2024-03-12T10:15:00Z",
			"updatedAt": "2024-03-12T10:15:00Z"
		}"#;

		let user: User = serde_json::from_str(body).unwrap();
		assert!(user.roles.is_empty());
	}
}
