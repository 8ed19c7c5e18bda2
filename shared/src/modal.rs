// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::capabilities::{Notifier, PointerEventSource};
use crate::form::{FormField, FormState};
use crate::validation::{validate_form, ValidationError};
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ModalVisibility {
	#[default]
	Closed,
	Open,
}

impl ModalVisibility {
	pub fn is_open(&self) -> bool {
		*self == Self::Open
	}
}

/// Where a pointer-down event landed relative to the modal's content
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerTarget {
	InsideContent,
	OutsideContent,
}

impl PointerTarget {
	pub fn from_containment(contained_in_content: bool) -> Self {
		if contained_in_content {
			Self::InsideContent
		} else {
			Self::OutsideContent
		}
	}
}

/// State for the user details modal: whether it's showing, what's been entered, and the platform hooks it needs.
///
/// The pointer event source is subscribed exactly while the modal is open.
#[derive(Clone)]
pub struct FormModal<P: PointerEventSource, N: Notifier> {
	visibility: ModalVisibility,
	form: FormState,
	pointer_source: P,
	notifier: N,
}

impl<P: PointerEventSource, N: Notifier> FormModal<P, N> {
	pub fn new(pointer_source: P, notifier: N) -> Self {
		Self {
			visibility: ModalVisibility::Closed,
			form: FormState::default(),
			pointer_source,
			notifier,
		}
	}

	#[cfg(test)]
	pub(crate) fn visibility(&self) -> ModalVisibility {
		self.visibility
	}

	pub fn is_open(&self) -> bool {
		self.visibility.is_open()
	}

	pub fn form(&self) -> &FormState {
		&self.form
	}

	#[cfg(test)]
	pub(crate) fn pointer_source(&self) -> &P {
		&self.pointer_source
	}

	#[cfg(test)]
	pub(crate) fn notifier(&self) -> &N {
		&self.notifier
	}

	/// Shows the modal. Anything entered before the last close is kept unless that close cleared it.
	pub fn open(&mut self) {
		if self.is_open() {
			return;
		}
		self.visibility = ModalVisibility::Open;
		self.pointer_source.subscribe();
		log::debug!("Form modal opened");
	}

	/// Hides the modal and throws away anything entered.
	pub fn close(&mut self) {
		if self.is_open() {
			self.pointer_source.unsubscribe();
			log::debug!("Form modal closed");
		}
		self.visibility = ModalVisibility::Closed;
		self.form.clear();
	}

	pub fn handle_change(&mut self, field: FormField, value: String) {
		self.form.set(field, value);
	}

	/// Same as [`handle_change`](Self::handle_change), for changes that come from an element ID. IDs that don't
	/// belong to a form field are ignored.
	pub fn handle_change_by_id(&mut self, field_id: &str, value: String) {
		match field_id.parse() {
			Ok(field) => self.handle_change(field, value),
			Err(error) => log::warn!("Ignoring form change: {}", error),
		}
	}

	pub fn handle_outside_interaction(&mut self, target: PointerTarget) {
		if self.is_open() && target == PointerTarget::OutsideContent {
			self.close();
		}
	}

	/// Validates what's been entered. On success the modal closes; on failure the user is notified and nothing
	/// changes.
	pub fn submit(&mut self, today: NaiveDate) -> Result<(), ValidationError> {
		if let Err(error) = validate_form(&self.form, today) {
			self.notifier.notify(&error.to_string());
			return Err(error);
		}

		log::info!("User details submitted");
		self.close();
		Ok(())
	}
}
