// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

const APP_NAME: &str = "Signup";

/// Sets the document title for the active page
pub fn set_page_title(page_name: &str) {
	if let Some(document) = window().and_then(|window| window.document()) {
		document.set_title(&page_title(page_name));
	}
}

fn page_title(page_name: &str) -> String {
	format!("{} | {}", page_name, APP_NAME)
}
