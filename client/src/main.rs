// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use app::App;
use context::AppContext;
use sycamore::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod form;
mod page_utils;
mod pages;
mod storage;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| {
		provide_context(ctx, AppContext::from_storage());

		view! { ctx, App }
	});
}
