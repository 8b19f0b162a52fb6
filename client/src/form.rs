// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::registration::RegistrationRequest;

/// Builds the registration payload if the form is currently submittable:
/// every field filled in and no outstanding validation message. `None` means
/// the submission must be rejected locally, without a network call.
pub fn registration_payload(
	name: &str,
	email: &str,
	password: &str,
	email_error: &str,
	password_error: &str,
) -> Option<RegistrationRequest> {
	if name.is_empty() || email.is_empty() || password.is_empty() {
		return None;
	}
	if !email_error.is_empty() || !password_error.is_empty() {
		return None;
	}
	Some(RegistrationRequest {
		name: String::from(name),
		email: String::from(email),
		password: String::from(password),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use signup_shared::validation::{email_error, password_error};

	fn payload_for(name: &str, email: &str, password: &str) -> Option<RegistrationRequest> {
		registration_payload(
			name,
			email,
			password,
			email_error(email).unwrap_or_default(),
			password_error(password).unwrap_or_default(),
		)
	}

	#[test]
	fn complete_valid_form_produces_the_exact_payload() {
		let payload = payload_for("Ada", "ada@example.com", "longenough1").unwrap();
		assert_eq!(
			payload,
			RegistrationRequest {
				name: String::from("Ada"),
				email: String::from("ada@example.com"),
				password: String::from("longenough1"),
			}
		);
	}

	#[test]
	fn any_empty_field_blocks_submission() {
		assert!(payload_for("", "ada@example.com", "longenough1").is_none());
		assert!(payload_for("Ada", "", "longenough1").is_none());
		assert!(payload_for("Ada", "ada@example.com", "").is_none());
	}

	#[test]
	fn pending_email_error_blocks_submission() {
		assert!(payload_for("Ada", "bad-email", "longenough1").is_none());
	}

	#[test]
	fn pending_password_error_blocks_submission() {
		assert!(payload_for("Ada", "ada@example.com", "short").is_none());
	}

	#[test]
	fn stale_error_message_blocks_submission_regardless_of_field_content() {
		// The gate trusts the displayed messages, not its own re-validation.
		assert!(registration_payload("Ada", "ada@example.com", "longenough1", "Please enter a valid email", "").is_none());
		assert!(
			registration_payload(
				"Ada",
				"ada@example.com",
				"longenough1",
				"",
				"Password must be at least 8 characters long"
			)
			.is_none()
		);
	}
}
