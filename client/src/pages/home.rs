// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::context::AppContext;
use crate::page_utils::set_page_title;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn HomeView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating home page");

	let app_context: &AppContext = use_context(ctx);
	if !*app_context.is_authenticated.get() {
		spawn_local_scoped(ctx, async {
			log::debug!("Redirecting to register");
			navigate("/register");
		});
		return view! { ctx, };
	}

	set_page_title("Home");

	view! {
		ctx,
		div(id="home") {
			h1 { "Welcome!" }
			p { "You're signed in." }
		}
	}
}
