// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::AuthStore;
use crate::storage::has_access_token;
use sycamore::prelude::*;

/// Application-wide state shared through the sycamore context
#[derive(Clone)]
pub struct AppContext {
	pub is_authenticated: RcSignal<bool>,
}

impl AppContext {
	/// Builds the context, treating a stored access token as an existing session
	pub fn from_storage() -> Self {
		let is_authenticated = has_access_token();
		log::debug!("Starting with authenticated state {}", is_authenticated);
		Self {
			is_authenticated: create_rc_signal(is_authenticated),
		}
	}
}

impl AuthStore for AppContext {
	fn set_authenticated(&self, authenticated: bool) {
		self.is_authenticated.set(authenticated);
	}
}
