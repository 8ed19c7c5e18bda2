// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::browser_document;
use crate::error::PlatformError;
use std::cell::Cell;
use std::rc::Rc;
use user_details_shared::capabilities::PointerEventSource;
use user_details_shared::modal::PointerTarget;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event as WebEvent, Node};

const POINTER_EVENT: &str = "mousedown";

struct ListenerRegistration {
	document: Option<Document>,
	listener: JsValue,
	attached: Cell<bool>,
}

impl ListenerRegistration {
	fn attach(&self) {
		if self.attached.get() {
			return;
		}
		let Some(document) = &self.document else {
			return;
		};
		match document.add_event_listener_with_callback(POINTER_EVENT, self.listener.unchecked_ref()) {
			Ok(()) => {
				self.attached.set(true);
				log::debug!("Attached document {} listener", POINTER_EVENT);
			}
			Err(error) => log::error!(
				"Failed to attach document {} listener: {}",
				POINTER_EVENT,
				PlatformError::from(error)
			),
		}
	}

	fn detach(&self) {
		if !self.attached.get() {
			return;
		}
		let Some(document) = &self.document else {
			return;
		};
		match document.remove_event_listener_with_callback(POINTER_EVENT, self.listener.unchecked_ref()) {
			Ok(()) => {
				self.attached.set(false);
				log::debug!("Detached document {} listener", POINTER_EVENT);
			}
			Err(error) => log::error!(
				"Failed to detach document {} listener: {}",
				POINTER_EVENT,
				PlatformError::from(error)
			),
		}
	}
}

impl Drop for ListenerRegistration {
	fn drop(&mut self) {
		self.detach();
	}
}

/// Pointer-down events from the whole document.
///
/// The listener is a JS function owned elsewhere (usually a `Closure` kept alive by the component); this only adds
/// and removes it. Clones share the same registration, so a clone can be used to detach the listener when the
/// component goes away.
#[derive(Clone)]
pub struct DocumentPointerSource {
	registration: Rc<ListenerRegistration>,
}

impl DocumentPointerSource {
	pub fn new(listener: JsValue) -> Self {
		let document = match browser_document() {
			Ok(document) => Some(document),
			Err(error) => {
				log::error!("Pointer events won't be available: {}", error);
				None
			}
		};
		Self::with_document(document, listener)
	}

	/// A source that never delivers anything, for when there's no browser to listen to.
	pub fn inert() -> Self {
		Self::with_document(None, JsValue::UNDEFINED)
	}

	fn with_document(document: Option<Document>, listener: JsValue) -> Self {
		let registration = ListenerRegistration {
			document,
			listener,
			attached: Cell::new(false),
		};
		Self {
			registration: Rc::new(registration),
		}
	}
}

impl PointerEventSource for DocumentPointerSource {
	fn subscribe(&mut self) {
		self.registration.attach();
	}

	fn unsubscribe(&mut self) {
		self.registration.detach();
	}
}

/// Works out whether an event landed inside the modal's content node. Anything that can't be resolved, including a
/// content node that isn't mounted, counts as outside.
pub fn classify_pointer_event(event: &WebEvent, content: Option<&Node>) -> PointerTarget {
	let Some(target_node) = event.target().and_then(|target| target.dyn_into::<Node>().ok()) else {
		return PointerTarget::OutsideContent;
	};
	let contained = content.is_some_and(|content| content.contains(Some(&target_node)));
	PointerTarget::from_containment(contained)
}
