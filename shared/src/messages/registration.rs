// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Data sent to the server when submitting the registration form
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationRequest {
	pub name: String,
	pub email: String,
	pub password: String,
}

/// Response data from the server for a registration attempt. The server
/// doesn't commit to any particular body shape, so everything is optional;
/// the client only logs what it receives.
#[derive(Clone, Debug, Deserialize)]
pub struct RegistrationResponse {
	pub res: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn registration_request_serializes_with_expected_keys() {
		let request = RegistrationRequest {
			name: String::from("Ada"),
			email: String::from("ada@example.com"),
			password: String::from("longenough1"),
		};
		let serialized = serde_json::to_value(&request).unwrap();
		assert_eq!(
			serialized,
			json!({
				"name": "Ada",
				"email": "ada@example.com",
				"password": "longenough1"
			})
		);
	}

	#[test]
	fn registration_response_reads_creation_result() {
		let response: RegistrationResponse = serde_json::from_str(r#"{"res": "created"}"#).unwrap();
		assert_eq!(response.res.as_deref(), Some("created"));
	}

	#[test]
	fn registration_response_tolerates_unknown_bodies() {
		let response: RegistrationResponse = serde_json::from_str(r#"{"whatever": 3}"#).unwrap();
		assert!(response.res.is_none());
	}
}
