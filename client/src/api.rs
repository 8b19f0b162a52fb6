// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_net::http::Request;
use signup_shared::messages::registration::{RegistrationRequest, RegistrationResponse};
use std::fmt;

/// Where registration submissions go. The backend location is hardcoded.
pub const REGISTER_ENDPOINT: &str = "http://localhost:8000/register";

/// Errors that can occur when submitting a registration to the server
pub enum RegistrationError {
	/// The request never completed: connection failure, or a body that
	/// couldn't be handled as JSON on the way out or back in.
	Http(gloo_net::Error),
	/// The server answered with a non-success status code.
	Status(u16),
}

impl fmt::Display for RegistrationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Http(error) => write!(f, "Failed to reach the registration endpoint: {}", error),
			Self::Status(status) => write!(f, "The registration endpoint answered with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for RegistrationError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Http(error)
	}
}

/// Sends a single registration to the server. No retry, no timeout, and no
/// in-flight tracking; the request runs to completion or failure.
///
/// # Errors
///
/// Errors occur when the request can't be serialized or sent, when the server
/// answers with a non-2xx status, and when the response body isn't readable
/// as JSON.
pub async fn register_user(registration: &RegistrationRequest) -> Result<RegistrationResponse, RegistrationError> {
	let response = Request::post(REGISTER_ENDPOINT).json(registration)?.send().await?;
	if !response.ok() {
		return Err(RegistrationError::Status(response.status()));
	}
	Ok(response.json().await?)
}
