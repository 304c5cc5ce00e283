// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session data kept in the browser's local storage so a reload keeps the user signed in

use signup_shared::messages::user::User;
use std::fmt;
use wasm_bindgen::JsValue;
use web_sys::Storage;

const ACCESS_TOKEN_KEY: &str = "access_token";
const PROFILE_KEY: &str = "profile";

pub enum StorageError {
	Unavailable,
	Browser(JsValue),
	Serialize(serde_json::Error),
}

impl From<JsValue> for StorageError {
	fn from(error: JsValue) -> Self {
		Self::Browser(error)
	}
}

impl From<serde_json::Error> for StorageError {
	fn from(error: serde_json::Error) -> Self {
		Self::Serialize(error)
	}
}

impl fmt::Display for StorageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unavailable => write!(f, "Local storage is not available"),
			Self::Browser(error) => write!(f, "The browser refused the storage operation: {:?}", error),
			Self::Serialize(error) => write!(f, "Failed to serialize session data: {}", error),
		}
	}
}

fn local_storage() -> Result<Storage, StorageError> {
	let window = web_sys::window().ok_or(StorageError::Unavailable)?;
	window.local_storage()?.ok_or(StorageError::Unavailable)
}

/// Stores the session handed out by the server after registration
pub fn save_session(access_token: &str, user: &User) -> Result<(), StorageError> {
	let storage = local_storage()?;
	let profile = serde_json::to_string(user)?;
	storage.set_item(ACCESS_TOKEN_KEY, access_token)?;
	storage.set_item(PROFILE_KEY, &profile)?;
	Ok(())
}

/// Whether a previous session left an access token behind. Storage failures count as no token.
pub fn has_access_token() -> bool {
	let token = local_storage().and_then(|storage| Ok(storage.get_item(ACCESS_TOKEN_KEY)?));
	match token {
		Ok(token) => token.is_some_and(|token| !token.is_empty()),
		Err(error) => {
			log::warn!("Unable to read stored session: {}", error);
			false
		}
	}
}
