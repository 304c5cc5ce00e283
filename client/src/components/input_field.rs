// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct InputFieldProps<'a> {
	id: &'static str,
	name: &'static str,
	input_type: &'static str,
	label: &'static str,
	placeholder: &'static str,
	value: &'a Signal<String>,
	error: &'a ReadSignal<Option<String>>,
}

/// A labelled form input that shows the error attached to it, if any
#[component]
pub fn InputField<'a, G: Html>(ctx: Scope<'a>, props: InputFieldProps<'a>) -> View<G> {
	let value = props.value;
	let error = props.error;
	let error_class_signal = create_memo(ctx, || if error.get().is_some() { "error" } else { "" });
	let error_id = format!("{}_error", props.id);

	view! {
		ctx,
		div(class="input_with_message") {
			label(for=props.id) {
				(props.label)
			}
			input(
				id=props.id,
				name=props.name,
				type=props.input_type,
				placeholder=props.placeholder,
				class=*error_class_signal.get(),
				bind:value=value
			)
			(
				if let Some(message) = (*error.get()).clone() {
					let error_id = error_id.clone();
					view! {
						ctx,
						span(id=error_id, class="input_error") {
							(message)
						}
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
