// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api;
use crate::form::registration_payload;
use crate::page_utils::set_page_title;
use signup_shared::validation;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	set_page_title("User Registration");

	let name_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());

	// Empty string means the field is valid as far as inline checks go.
	let email_error_signal = create_signal(ctx, String::new());
	let password_error_signal = create_signal(ctx, String::new());

	let submitted_signal = create_signal(ctx, false);
	let error_signal = create_signal(ctx, false);

	// A keystroke in any field retracts a previously shown success notice.
	create_effect(ctx, move || {
		name_signal.track();
		email_signal.track();
		password_signal.track();
		submitted_signal.set(false);
	});

	create_effect(ctx, move || {
		let email = email_signal.get();
		let message = validation::email_error(&email).unwrap_or_default();
		email_error_signal.set(String::from(message));
	});

	// Skips the effect's initial run so a pristine form renders without the
	// length message; once the field has been edited, emptying it brings the
	// message back.
	let mut password_checked = false;
	create_effect(ctx, move || {
		let password = password_signal.get();
		if !password_checked {
			password_checked = true;
			return;
		}
		let message = validation::password_error(&password).unwrap_or_default();
		password_error_signal.set(String::from(message));
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let registration = registration_payload(
			&name_signal.get(),
			&email_signal.get(),
			&password_signal.get(),
			&email_error_signal.get(),
			&password_error_signal.get(),
		);
		let Some(registration) = registration else {
			error_signal.set(true);
			return;
		};

		spawn_local_scoped(ctx, async move {
			match api::register_user(&registration).await {
				Ok(response) => {
					log::info!("Registration accepted for {}: {:?}", registration.name, response);
					submitted_signal.set(true);
					error_signal.set(false);
					navigate("/login");
				}
				Err(error) => {
					log::error!("Registration submission failed: {}", error);
					error_signal.set(true);
				}
			}
		});
	};

	view! {
		ctx,
		h1 { "User Registration" }
		div(class="messages") {
			(
				if *error_signal.get() {
					view! {
						ctx,
						div(class="error") {
							h1 { "Please enter all the fields correctly" }
						}
					}
				} else {
					view! { ctx, }
				}
			)
			(
				if *submitted_signal.get() {
					view! {
						ctx,
						div(class="success") {
							h1 { (format!("User {} successfully registered!", name_signal.get())) }
						}
					}
				} else {
					view! { ctx, }
				}
			)
		}
		form(id="register_user", on:submit=form_submission_handler) {
			div(class="input_with_message") {
				label(for="register_name") {
					"Name: "
				}
				input(id="register_name", type="text", bind:value=name_signal)
			}
			div(class="input_with_message") {
				label(for="register_email") {
					"Email: "
				}
				input(id="register_email", type="email", bind:value=email_signal)
				(
					if !email_error_signal.get().is_empty() {
						view! {
							ctx,
							span(class="input_error register_email_error") {
								(email_error_signal.get())
							}
						}
					} else {
						view! { ctx, }
					}
				)
			}
			div(class="input_with_message") {
				label(for="register_password") {
					"Password: "
				}
				input(id="register_password", type="password", bind:value=password_signal)
				(
					if !password_error_signal.get().is_empty() {
						view! {
							ctx,
							span(class="input_error register_password_error") {
								(password_error_signal.get())
							}
						}
					} else {
						view! { ctx, }
					}
				)
			}
			button(type="submit") {
				"Submit"
			}
		}
	}
}
