// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::browser_window;
use crate::error::PlatformError;
use user_details_shared::capabilities::Notifier;

/// Notifies the user with the browser's built-in alert dialog.
#[derive(Clone)]
pub struct WindowAlert;

impl Notifier for WindowAlert {
	fn notify(&self, message: &str) {
		let result = browser_window()
			.and_then(|window| window.alert_with_message(message).map_err(PlatformError::from));
		if let Err(error) = result {
			log::error!("Failed to show alert \"{}\": {}", message, error);
		}
	}
}
