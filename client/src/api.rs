// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::api_endpoint;
use crate::error::RegisterError;
use crate::storage::save_session;
use gloo_net::http::Request;
use serde_json::Value;
use signup_shared::messages::user::AuthResponse;
use signup_shared::messages::user_register::{FieldErrors, RegisterAccount, ServerErrorPayload};
use signup_shared::messages::ErrorResponse;

const REGISTER_PATH: &str = "register";
const UNPROCESSABLE_ENTITY: u16 = 422;

/// The remote account service
// Implementations run on the browser's single thread; their futures aren't Send.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
	/// Asks the server to create an account. Exactly one request is made; nothing is retried.
	async fn register_account(&self, body: &RegisterAccount) -> Result<AuthResponse, RegisterError>;
}

impl<T: AccountApi + ?Sized> AccountApi for &T {
	async fn register_account(&self, body: &RegisterAccount) -> Result<AuthResponse, RegisterError> {
		(**self).register_account(body).await
	}
}

/// Account service reached over HTTP
pub struct HttpAccountApi {
	register_url: String,
}

impl HttpAccountApi {
	pub fn new(base_url: &str) -> Self {
		Self {
			register_url: api_endpoint(base_url, REGISTER_PATH),
		}
	}
}

impl AccountApi for HttpAccountApi {
	async fn register_account(&self, body: &RegisterAccount) -> Result<AuthResponse, RegisterError> {
		log::debug!("Sending registration request to {}", self.register_url);
		let response = Request::post(&self.register_url).json(body)?.send().await?;
		let status = response.status();
		let response_body = response.text().await?;
		let auth = decode_register_response(status, &response_body)?;

		if let Err(error) = save_session(&auth.data.access_token, &auth.data.user) {
			log::error!("Registered, but failed to store the session: {}", error);
		}

		Ok(auth)
	}
}

/// Turns the status and body of a registration response into the account data or a classified error
pub fn decode_register_response(status: u16, body: &str) -> Result<AuthResponse, RegisterError> {
	match status {
		200..=299 => serde_json::from_str(body).map_err(|error| RegisterError::MalformedResponse(error.to_string())),
		UNPROCESSABLE_ENTITY => Err(decode_validation_rejection(body)),
		_ => Err(RegisterError::Http {
			status,
			body: String::from(body),
		}),
	}
}

fn decode_validation_rejection(body: &str) -> RegisterError {
	let response = match serde_json::from_str::<ErrorResponse<Value>>(body) {
		Ok(response) => response,
		Err(error) => {
			log::debug!("Validation rejection wasn't a recognizable error response: {}", error);
			return RegisterError::ValidationRejected {
				message: String::new(),
				field_errors: None,
			};
		}
	};

	let field_errors = match response.data {
		Some(Value::Object(entries)) => {
			let mut payload = ServerErrorPayload::new();
			for (field, message) in entries {
				match message {
					Value::String(message) => {
						payload.insert(field, message);
					}
					other => log::warn!("Ignoring non-text error for field {}: {}", field, other),
				}
			}
			Some(FieldErrors::from_server_payload(&payload))
		}
		Some(other) => {
			log::debug!("Validation rejection data wasn't a field mapping: {}", other);
			None
		}
		None => None,
	};

	RegisterError::ValidationRejected {
		message: response.message,
		field_errors,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use signup_shared::messages::user_register::RegisterField;

	const SUCCESS_BODY: &str = r#"{
		"message": "Registered",
		"data": {
			"access_token": "Bearer abc",
			"user": {
				"_id": "1",
				"email": "ada@example.com",
				"roles": ["User"],
				"createdAt": "2024-03-12T10:15:00.000Z",
				"updatedAt": "2024-03-12T10:15:00.000Z"
			}
		}
	}"#;

	#[test]
	fn success_decodes_account() {
		let auth = decode_register_response(200, SUCCESS_BODY).unwrap();
		assert_eq!(auth.message, "Registered");
		assert_eq!(auth.data.user.email, "ada@example.com");
	}

	#[test]
	fn success_with_unexpected_body_is_malformed() {
		let error = decode_register_response(201, "<html></html>").unwrap_err();
		assert!(matches!(error, RegisterError::MalformedResponse(_)));
	}

	#[test]
	fn unprocessable_entity_carries_field_errors() {
		let body = r#"{"message": "Invalid data", "data": {"email": "taken"}}"#;
		let error = decode_register_response(422, body).unwrap_err();

		let RegisterError::ValidationRejected { message, field_errors } = error else {
			panic!("expected a validation rejection");
		};
		assert_eq!(message, "Invalid data");
		let field_errors = field_errors.unwrap();
		assert_eq!(field_errors.len(), 1);
		assert_eq!(field_errors.message(RegisterField::Email), Some("taken"));
	}

	#[test]
	fn unprocessable_entity_without_data_has_no_field_errors() {
		let error = decode_register_response(422, r#"{"message": "Invalid data"}"#).unwrap_err();
		assert_eq!(
			error,
			RegisterError::ValidationRejected {
				message: String::from("Invalid data"),
				field_errors: None,
			}
		);
	}

	#[test]
	fn unprocessable_entity_with_wrong_shape_has_no_field_errors() {
		let error = decode_register_response(422, r#"{"message": "Invalid data", "data": ["email"]}"#).unwrap_err();
		assert_eq!(
			error,
			RegisterError::ValidationRejected {
				message: String::from("Invalid data"),
				field_errors: None,
			}
		);
	}

	#[test]
	fn unprocessable_entity_keeps_text_entries_of_mixed_data() {
		let body = r#"{"message": "Invalid data", "data": {"email": "taken", "password": ["short"]}}"#;
		let error = decode_register_response(422, body).unwrap_err();

		let RegisterError::ValidationRejected { message, field_errors } = error else {
			panic!("expected a validation rejection");
		};
		assert_eq!(message, "Invalid data");
		let field_errors = field_errors.unwrap();
		assert_eq!(field_errors.len(), 1);
		assert_eq!(field_errors.message(RegisterField::Email), Some("taken"));
		assert_eq!(field_errors.get(RegisterField::Password), None);
	}

	#[test]
	fn unprocessable_entity_with_unreadable_body_has_empty_message() {
		let error = decode_register_response(422, "<html>Unprocessable</html>").unwrap_err();
		assert_eq!(
			error,
			RegisterError::ValidationRejected {
				message: String::new(),
				field_errors: None,
			}
		);
	}

	#[test]
	fn other_statuses_are_http_errors() {
		let error = decode_register_response(500, "oops").unwrap_err();
		assert_eq!(
			error,
			RegisterError::Http {
				status: 500,
				body: String::from("oops"),
			}
		);

		// Same payload as a validation rejection, but the status doesn't say so
		let error = decode_register_response(400, r#"{"message": "Invalid data", "data": {"email": "taken"}}"#)
			.unwrap_err();
		assert!(matches!(error, RegisterError::Http { status: 400, .. }));
	}
}
