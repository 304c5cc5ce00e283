// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Values entered into the registration form. Any field may be empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationInput {
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

/// Request data from the client to create an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterAccount {
	pub email: String,
	pub password: String,
}

/// Field-to-message mapping the server sends when it rejects a registration
pub type ServerErrorPayload = BTreeMap<String, String>;

/// The fields of the registration form
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterField {
	Email,
	Password,
	ConfirmPassword,
}

impl RegisterField {
	pub const ALL: [Self; 3] = [Self::Email, Self::Password, Self::ConfirmPassword];

	/// The name of the field as used in forms and by the server
	pub fn name(&self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Password => "password",
			Self::ConfirmPassword => "confirm_password",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|field| field.name() == name)
	}
}

impl fmt::Display for RegisterField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Where a field error was detected
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
	Client,
	Server,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
	pub field: RegisterField,
	pub message: String,
	pub origin: ErrorOrigin,
}

/// The errors currently attached to the registration form. Each field holds at most one error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	errors: BTreeMap<RegisterField, FieldError>,
}

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches an error to its field, returning the error it replaced
	pub fn insert(&mut self, error: FieldError) -> Option<FieldError> {
		self.errors.insert(error.field, error)
	}

	pub fn set(&mut self, field: RegisterField, message: impl Into<String>, origin: ErrorOrigin) {
		self.insert(FieldError {
			field,
			message: message.into(),
			origin,
		});
	}

	/// Applies all errors from `other`, overwriting any error already present on the same field
	pub fn merge(&mut self, other: FieldErrors) {
		self.errors.extend(other.errors);
	}

	pub fn get(&self, field: RegisterField) -> Option<&FieldError> {
		self.errors.get(&field)
	}

	pub fn message(&self, field: RegisterField) -> Option<&str> {
		self.get(field).map(|error| error.message.as_str())
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn iter(&self) -> btree_map::Values<'_, RegisterField, FieldError> {
		self.errors.values()
	}

	/// Converts a server rejection payload into field errors. Keys that don't name a registration field are
	/// dropped.
	pub fn from_server_payload(payload: &ServerErrorPayload) -> Self {
		let mut errors = Self::new();
		for (name, message) in payload.iter() {
			match RegisterField::from_name(name) {
				Some(field) => errors.set(field, message.clone(), ErrorOrigin::Server),
				None => log::warn!("Server reported an error for unknown registration field {}", name),
			}
		}
		errors
	}
}

impl<'a> IntoIterator for &'a FieldErrors {
	type Item = &'a FieldError;
	type IntoIter = btree_map::Values<'a, RegisterField, FieldError>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_body_never_carries_confirmation() {
		let body = RegisterAccount {
			email: String::from("ada@example.com"),
			password: String::from("hunter22"),
		};
		let json = serde_json::to_value(&body).unwrap();
		let object = json.as_object().unwrap();

		assert_eq!(object.len(), 2);
		assert_eq!(object["email"], "ada@example.com");
		assert_eq!(object["password"], "hunter22");
		assert!(!object.contains_key("confirm_password"));
	}

	#[test]
	fn field_names_round_trip() {
		for field in RegisterField::ALL {
			assert_eq!(RegisterField::from_name(field.name()), Some(field));
		}
		assert_eq!(RegisterField::from_name("username"), None);
	}

	#[test]
	fn later_errors_overwrite_earlier_ones() {
		let mut errors = FieldErrors::new();
		errors.set(RegisterField::Email, "Email is required", ErrorOrigin::Client);

		let mut server_errors = FieldErrors::new();
		server_errors.set(RegisterField::Email, "taken", ErrorOrigin::Server);
		errors.merge(server_errors);

		assert_eq!(errors.len(), 1);
		let error = errors.get(RegisterField::Email).unwrap();
		assert_eq!(error.message, "taken");
		assert_eq!(error.origin, ErrorOrigin::Server);
	}

	#[test]
	fn server_payload_drops_unknown_fields() {
		let mut payload = ServerErrorPayload::new();
		payload.insert(String::from("email"), String::from("taken"));
		payload.insert(String::from("username"), String::from("not a field here"));

		let errors = FieldErrors::from_server_payload(&payload);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.message(RegisterField::Email), Some("taken"));
		assert!(errors.iter().all(|error| error.origin == ErrorOrigin::Server));
	}
}
