// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Base URL of the account API chosen at build time. When unset, the API is expected at the origin serving the
/// application.
const API_URL_OVERRIDE: Option<&str> = option_env!("SIGNUP_API_URL");

/// Gets the base URL of the account API, without a trailing slash.
///
/// # Panics
///
/// This function panics when no override is configured and the browser context (window, location) is
/// inaccessible.
pub fn api_base_url() -> String {
	if let Some(url) = API_URL_OVERRIDE {
		return String::from(url.trim_end_matches('/'));
	}

	let js_location = web_sys::window()
		.expect("Failed to get browser window context")
		.location();
	let origin = js_location.origin().expect("Failed to get current origin");
	String::from(origin.trim_end_matches('/'))
}

/// Joins an API path onto the base URL
pub fn api_endpoint(base_url: &str, path: &str) -> String {
	format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
