// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

/// Sets the browser tab title for the active page. A missing browser context
/// is ignored; there's nothing useful to do without one.
pub fn set_page_title(new_title: &str) {
	if let Some(document) = window().and_then(|window| window.document()) {
		document.set_title(new_title);
	}
}
