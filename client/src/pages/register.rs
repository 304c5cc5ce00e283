// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::HttpAccountApi;
use crate::components::input_field::InputField;
use crate::config::api_base_url;
use crate::context::AppContext;
use crate::form::{
	errors_after_outcome, errors_after_validation, AttemptCounter, RegistrationForm, RouterNavigator, REGISTERED_ROUTE,
};
use crate::page_utils::set_page_title;
use signup_shared::messages::user_register::{FieldErrors, RegisterField, RegistrationInput};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn RegisterView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let app_context: &AppContext = use_context(ctx);
	if *app_context.is_authenticated.get() {
		spawn_local_scoped(ctx, async {
			navigate(REGISTERED_ROUTE);
		});
		return view! { ctx, };
	}

	log::debug!("Activating registration page");
	set_page_title("Create Account");

	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	let confirm_password_signal = create_signal(ctx, String::new());
	let errors_signal = create_signal(ctx, FieldErrors::new());
	let submitting_signal = create_signal(ctx, false);

	let email_error_signal = create_memo(ctx, || {
		errors_signal.get().message(RegisterField::Email).map(String::from)
	});
	let password_error_signal = create_memo(ctx, || {
		errors_signal.get().message(RegisterField::Password).map(String::from)
	});
	let confirm_password_error_signal = create_memo(ctx, || {
		errors_signal
			.get()
			.message(RegisterField::ConfirmPassword)
			.map(String::from)
	});
	// The in-flight state is only reflected in styling; it doesn't block another submission.
	let form_class_signal = create_memo(ctx, || if *submitting_signal.get() { "submitting" } else { "" });

	let attempts = create_ref(ctx, AttemptCounter::default());
	let form = create_ref(
		ctx,
		RegistrationForm::new(
			HttpAccountApi::new(&api_base_url()),
			app_context.clone(),
			RouterNavigator,
		),
	);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let input = RegistrationInput {
			email: (*email_signal.get()).clone(),
			password: (*password_signal.get()).clone(),
			confirm_password: (*confirm_password_signal.get()).clone(),
		};
		let attempt = attempts.begin();
		let validation = form.validate(&input);
		errors_signal.set(errors_after_validation(&validation));

		let registration = match validation {
			Ok(registration) => registration,
			Err(errors) => {
				log::debug!("Registration form has {} invalid field(s)", errors.len());
				submitting_signal.set(false);
				return;
			}
		};

		// Scoped to the page, so a response arriving after the user has left is never acted on
		spawn_local_scoped(ctx, async move {
			submitting_signal.set(true);
			let outcome = form.submit(registration).await;
			if !attempts.is_latest(attempt) {
				log::debug!("Discarding outcome of superseded registration attempt {}", attempt);
				return;
			}
			submitting_signal.set(false);

			let current = (*errors_signal.get()).clone();
			errors_signal.set(errors_after_outcome(current, &outcome));
		});
	};

	view! {
		ctx,
		div(id="register") {
			h1 { "Create Account" }
			form(id="register_user", class=*form_class_signal.get(), on:submit=form_submission_handler) {
				InputField(
					id="register_email",
					name="email",
					input_type="text",
					label="Email",
					placeholder="Email",
					value=email_signal,
					error=email_error_signal
				)
				InputField(
					id="register_password",
					name="password",
					input_type="password",
					label="Password",
					placeholder="Password",
					value=password_signal,
					error=password_error_signal
				)
				InputField(
					id="register_confirm_password",
					name="confirm_password",
					input_type="password",
					label="Confirm Password",
					placeholder="Confirm Password",
					value=confirm_password_signal,
					error=confirm_password_error_signal
				)
				button(type="submit") {
					"Register"
				}
				a(id="register_login_link", href="/login") {
					p { "Already have an account?" }
					p { "Login" }
				}
			}
		}
	}
}
