// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Shows a message to the user and doesn't return until the user has acknowledged it.
pub trait Notifier {
	fn notify(&self, message: &str);
}

/// A source of pointer-down events from anywhere on the page.
///
/// While subscribed, the platform delivers each event to the modal's outside interaction handler. Both methods must
/// be safe to call when already in the requested state.
pub trait PointerEventSource {
	fn subscribe(&mut self);
	fn unsubscribe(&mut self);
}
