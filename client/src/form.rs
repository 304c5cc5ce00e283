// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::AccountApi;
use crate::error::RegisterError;
use signup_shared::messages::user_register::{FieldErrors, RegistrationInput};
use signup_shared::validation::{validate_registration, ValidatedRegistration};
use std::cell::Cell;
use sycamore::futures::spawn_local;

/// Route the user is sent to after creating an account
pub const REGISTERED_ROUTE: &str = "/";

/// Holder of the application's signed-in state
pub trait AuthStore {
	fn set_authenticated(&self, authenticated: bool);
}

impl<T: AuthStore + ?Sized> AuthStore for &T {
	fn set_authenticated(&self, authenticated: bool) {
		(**self).set_authenticated(authenticated)
	}
}

/// Moves the application to another route
pub trait Navigator {
	fn navigate(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
	fn navigate(&self, path: &str) {
		(**self).navigate(path)
	}
}

/// Navigates with the browser history router
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
	fn navigate(&self, path: &str) {
		// Runs after the current task so the page being left can finish updating its own signals first
		let path = String::from(path);
		spawn_local(async move {
			sycamore_router::navigate(&path);
		});
	}
}

/// What happened to a submission that reached the server
#[derive(Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// The account was created and the user has been moved on
	Registered,
	/// The server rejected the data; these errors belong on the form
	Rejected(FieldErrors),
	/// The submission failed in a way the form doesn't display
	Ignored(RegisterError),
}

impl SubmitOutcome {
	/// Errors to show on the form for this outcome
	pub fn field_errors(&self) -> Option<&FieldErrors> {
		match self {
			Self::Rejected(errors) => Some(errors),
			_ => None,
		}
	}
}

/// The errors a form shows once a new attempt has been validated. Nothing from earlier attempts is kept.
pub fn errors_after_validation(validation: &Result<ValidatedRegistration, FieldErrors>) -> FieldErrors {
	match validation {
		Ok(_) => FieldErrors::new(),
		Err(errors) => errors.clone(),
	}
}

/// The errors a form shows once an attempt's outcome is known. Server errors replace any error on the same field.
pub fn errors_after_outcome(current: FieldErrors, outcome: &SubmitOutcome) -> FieldErrors {
	let mut errors = current;
	if let Some(server_errors) = outcome.field_errors() {
		errors.merge(server_errors.clone());
	}
	errors
}

/// Numbers submission attempts so only the most recent one updates the form
#[derive(Default)]
pub struct AttemptCounter {
	latest: Cell<u64>,
}

impl AttemptCounter {
	/// Starts a new attempt, superseding all earlier ones
	pub fn begin(&self) -> u64 {
		let attempt = self.latest.get() + 1;
		self.latest.set(attempt);
		attempt
	}

	pub fn is_latest(&self, attempt: u64) -> bool {
		self.latest.get() == attempt
	}
}

/// Drives the registration form: checks input, sends it to the account service and acts on the result. Each
/// submission is independent; nothing is kept between attempts.
pub struct RegistrationForm<A, S, N> {
	api: A,
	auth: S,
	navigator: N,
}

impl<A: AccountApi, S: AuthStore, N: Navigator> RegistrationForm<A, S, N> {
	pub fn new(api: A, auth: S, navigator: N) -> Self {
		Self { api, auth, navigator }
	}

	/// Runs the client-side rules. Input that fails here must not be submitted.
	pub fn validate(&self, input: &RegistrationInput) -> Result<ValidatedRegistration, FieldErrors> {
		validate_registration(input)
	}

	/// Sends validated data to the account service.
	///
	/// On success the user is marked as signed in before navigating away. A validation rejection from the server
	/// is returned for display when it names fields; every other failure is only logged.
	pub async fn submit(&self, registration: ValidatedRegistration) -> SubmitOutcome {
		log::debug!("Submitting registration for {}", registration.body().email);

		match self.api.register_account(registration.body()).await {
			Ok(_) => {
				log::info!("Account registered");
				self.auth.set_authenticated(true);
				self.navigator.navigate(REGISTERED_ROUTE);
				SubmitOutcome::Registered
			}
			Err(RegisterError::ValidationRejected {
				field_errors: Some(field_errors),
				..
			}) => {
				log::debug!("Server rejected {} registration field(s)", field_errors.len());
				SubmitOutcome::Rejected(field_errors)
			}
			Err(error) => {
				log::error!("Registration failed: {}", error);
				SubmitOutcome::Ignored(error)
			}
		}
	}
}
