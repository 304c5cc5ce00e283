// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client-side rules for the registration form. Each field reports only the first rule it fails.

use crate::messages::user_register::{ErrorOrigin, FieldErrors, RegisterAccount, RegisterField, RegistrationInput};
use email_address::{EmailAddress, Options as EmailOptions};
use std::ops::RangeInclusive;

pub const EMAIL_LENGTH: RangeInclusive<usize> = 5..=160;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=160;

/// Registration data that has passed validation. This can only be created by [`validate_registration`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatedRegistration(RegisterAccount);

impl ValidatedRegistration {
	/// The request body to send to the server
	pub fn body(&self) -> &RegisterAccount {
		&self.0
	}

	pub fn into_body(self) -> RegisterAccount {
		self.0
	}
}

/// Checks the form input, producing either the request body or the errors to show for each failing field
pub fn validate_registration(input: &RegistrationInput) -> Result<ValidatedRegistration, FieldErrors> {
	let mut errors = FieldErrors::new();

	if let Err(message) = check_email(&input.email) {
		errors.set(RegisterField::Email, message, ErrorOrigin::Client);
	}
	if let Err(message) = check_password(&input.password) {
		errors.set(RegisterField::Password, message, ErrorOrigin::Client);
	}
	if let Err(message) = check_confirm_password(&input.password, &input.confirm_password) {
		errors.set(RegisterField::ConfirmPassword, message, ErrorOrigin::Client);
	}

	if !errors.is_empty() {
		return Err(errors);
	}

	Ok(ValidatedRegistration(RegisterAccount {
		email: input.email.clone(),
		password: input.password.clone(),
	}))
}

fn check_email(email: &str) -> Result<(), &'static str> {
	if email.is_empty() {
		return Err("Email is required");
	}
	if EmailAddress::parse_with_options(email, EmailOptions::default().with_required_tld()).is_err() {
		return Err("Email is not a valid address");
	}
	if !EMAIL_LENGTH.contains(&email.chars().count()) {
		return Err("Email must be between 5 and 160 characters");
	}
	Ok(())
}

fn check_password(password: &str) -> Result<(), &'static str> {
	if password.is_empty() {
		return Err("Password is required");
	}
	if !PASSWORD_LENGTH.contains(&password.chars().count()) {
		return Err("Password must be between 6 and 160 characters");
	}
	Ok(())
}

fn check_confirm_password(password: &str, confirm_password: &str) -> Result<(), &'static str> {
	if confirm_password.is_empty() {
		return Err("Password confirmation is required");
	}
	if !PASSWORD_LENGTH.contains(&confirm_password.chars().count()) {
		return Err("Password confirmation must be between 6 and 160 characters");
	}
	if confirm_password != password {
		return Err("Passwords do not match");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn input(email: &str, password: &str, confirm_password: &str) -> RegistrationInput {
		RegistrationInput {
			email: String::from(email),
			password: String::from(password),
			confirm_password: String::from(confirm_password),
		}
	}

	#[test]
	fn accepts_valid_input() {
		let validated = validate_registration(&input("ada@example.com", "hunter22", "hunter22")).unwrap();
		assert_eq!(validated.body().email, "ada@example.com");
		assert_eq!(validated.body().password, "hunter22");
	}

	#[test]
	fn empty_form_reports_every_field() {
		let errors = validate_registration(&RegistrationInput::default()).unwrap_err();
		assert_eq!(errors.len(), 3);
		assert_eq!(errors.message(RegisterField::Email), Some("Email is required"));
		assert_eq!(errors.message(RegisterField::Password), Some("Password is required"));
		assert_eq!(
			errors.message(RegisterField::ConfirmPassword),
			Some("Password confirmation is required")
		);
		assert!(errors.iter().all(|error| error.origin == ErrorOrigin::Client));
	}

	#[test]
	fn rejects_mismatched_confirmation() {
		let errors = validate_registration(&input("ada@example.com", "hunter22", "hunter23")).unwrap_err();
		assert_eq!(errors.len(), 1);
		assert_eq!(errors.message(RegisterField::ConfirmPassword), Some("Passwords do not match"));
	}

	#[test]
	fn rejects_malformed_email() {
		for email in ["ada", "ada@", "@example.com", "ada@example", "ada example@example.com"] {
			let errors = validate_registration(&input(email, "hunter22", "hunter22")).unwrap_err();
			assert_eq!(
				errors.message(RegisterField::Email),
				Some("Email is not a valid address"),
				"{email} should be rejected"
			);
		}
	}

	#[test]
	fn rejects_overlong_email() {
		let label = "a".repeat(60);
		let email = format!("ada@{label}.{label}.{label}.example.com");
		let errors = validate_registration(&input(&email, "hunter22", "hunter22")).unwrap_err();
		assert_eq!(
			errors.message(RegisterField::Email),
			Some("Email must be between 5 and 160 characters")
		);
	}

	#[test]
	fn password_length_is_counted_in_characters() {
		// Six characters, but more than six bytes
		let password = "pässwö";
		assert!(validate_registration(&input("ada@example.com", password, password)).is_ok());

		let errors = validate_registration(&input("ada@example.com", "short", "short")).unwrap_err();
		assert_eq!(
			errors.message(RegisterField::Password),
			Some("Password must be between 6 and 160 characters")
		);
		assert_eq!(
			errors.message(RegisterField::ConfirmPassword),
			Some("Password confirmation must be between 6 and 160 characters")
		);
	}
}
