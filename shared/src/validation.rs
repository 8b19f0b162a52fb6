// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;
use std::sync::LazyLock;

/// The minimum number of characters the server accepts in a password
pub const PASSWORD_MINIMUM_LENGTH: usize = 8;

// local@domain.tld with a 2-4 character TLD, ASCII word characters only.
// Deliberately narrow: this is the shape the registration endpoint has
// always enforced, so longer TLDs and the more exotic address forms are
// rejected here rather than bounced by the server.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[[:word:].-]+@[[:word:]-]+\.[[:word:]]{2,4}$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Checks an email address as it's entered. Returns a user-facing message for
/// input that doesn't look like an address. Empty input is left unannotated;
/// field presence is enforced at submission time instead.
pub fn email_error(email: &str) -> Option<&'static str> {
	if email.is_empty() || EMAIL_REGEX.is_match(email) {
		None
	} else {
		Some("Please enter a valid email")
	}
}

/// Checks a password as it's entered. Length is the only requirement; no
/// complexity rules apply. Unlike [`email_error`], an emptied field is
/// annotated: any password shorter than the minimum gets the message.
pub fn password_error(password: &str) -> Option<&'static str> {
	if password.len() >= PASSWORD_MINIMUM_LENGTH {
		None
	} else {
		Some("Password must be at least 8 characters long")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn well_formed_emails_pass() {
		for email in [
			"ada@example.com",
			"ada.lovelace@example.org",
			"first-last@my-host.io",
			"under_score@example.info",
			"1234@567.89",
		] {
			assert!(email_error(email).is_none(), "{} should be accepted", email);
		}
	}

	#[test]
	fn malformed_emails_are_annotated() {
		for email in [
			"bad-email",
			"missing-domain@",
			"@missing-local.com",
			"no-tld@example",
			"two@at@signs.com",
			"spaces in@example.com",
			"dot.in@dom.ain.com",
		] {
			assert_eq!(email_error(email), Some("Please enter a valid email"), "{}", email);
		}
	}

	#[test]
	fn long_tlds_are_rejected() {
		// A known limitation of the pattern rather than a judgment on the address.
		assert!(email_error("someone@example.museum").is_some());
		assert!(email_error("someone@example.info").is_none());
	}

	#[test]
	fn empty_email_carries_no_message() {
		assert!(email_error("").is_none());
	}

	#[test]
	fn short_passwords_are_annotated() {
		assert_eq!(
			password_error("1234567"),
			Some("Password must be at least 8 characters long")
		);
		assert!(password_error("a").is_some());
	}

	#[test]
	fn passwords_at_or_over_the_minimum_pass() {
		assert!(password_error("12345678").is_none());
		assert!(password_error("longenough1").is_none());
	}

	#[test]
	fn emptied_password_is_annotated() {
		assert_eq!(
			password_error(""),
			Some("Password must be at least 8 characters long")
		);
	}
}
