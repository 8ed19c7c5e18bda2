// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::alert::WindowAlert;
use crate::config::ModalConfig;
use crate::pointer::{classify_pointer_event, DocumentPointerSource};
use chrono::Utc;
use sycamore::prelude::*;
use user_details_shared::capabilities::PointerEventSource;
use user_details_shared::form::FormField;
use user_details_shared::modal::FormModal;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, Node};

type BrowserFormModal = FormModal<DocumentPointerSource, WindowAlert>;

#[derive(Prop)]
pub struct FormFieldInputProps<'a> {
	field: FormField,
	modal: &'a RcSignal<BrowserFormModal>,
}

#[component]
pub fn FormFieldInput<'a, G: Html>(ctx: Scope<'a>, props: FormFieldInputProps<'a>) -> View<G> {
	let field = props.field;
	let modal = props.modal;
	let value = create_signal(ctx, modal.get_untracked().form().value(field).to_string());

	create_effect(ctx, move || {
		let entered_value = value.get();
		if modal.get_untracked().form().value(field) != entered_value.as_str() {
			modal.modify().handle_change_by_id(field.id(), (*entered_value).clone());
		}
	});

	view! {
		ctx,
		div {
			label(for=field.id()) { (field.label()) }
			input(id=field.id(), type=field.input_type(), bind:value=value)
		}
	}
}

#[derive(Prop)]
pub struct ModalContentProps<'a, G: GenericNode> {
	modal: &'a RcSignal<BrowserFormModal>,
	/// Set to the content element; pointer events outside it close the modal.
	content_ref: &'a NodeRef<G>,
}

/// The overlay and the form inside it, shown while the modal is open.
#[component]
pub fn ModalContent<'a, G: Html>(ctx: Scope<'a>, props: ModalContentProps<'a, G>) -> View<G> {
	let config: &ModalConfig = use_context(ctx);
	let modal = props.modal;

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		// The modal shows the rejection to the user itself.
		let today = Utc::now().date_naive();
		if let Err(error) = modal.modify().submit(today) {
			log::debug!("Form submission rejected: {}", error);
		}
	};

	view! {
		ctx,
		div(class="modal") {
			div(ref=props.content_ref, class="modal-content") {
				form(on:submit=submit_handler) {
					FormFieldInput(field=FormField::Username, modal=modal)
					FormFieldInput(field=FormField::Email, modal=modal)
					FormFieldInput(field=FormField::Phone, modal=modal)
					FormFieldInput(field=FormField::DateOfBirth, modal=modal)
					button(type="submit", class="submit-button") { (config.submit_label.clone()) }
				}
			}
		}
	}
}

#[component]
pub fn FormModalView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &ModalConfig = use_context(ctx);
	let modal = create_ref(
		ctx,
		create_rc_signal(FormModal::new(DocumentPointerSource::inert(), WindowAlert)),
	);
	let content_ref = create_node_ref(ctx);

	if G::IS_BROWSER {
		let pointer_listener = Closure::<dyn FnMut(WebEvent)>::wrap(Box::new({
			let modal = modal.clone();
			let content_ref = content_ref.clone();
			move |event: WebEvent| {
				let content: Option<Node> = content_ref
					.try_get::<DomNode>()
					.map(|content_node| content_node.unchecked_into());
				let target = classify_pointer_event(&event, content.as_ref());
				modal.modify().handle_outside_interaction(target);
			}
		}));
		let pointer_source = DocumentPointerSource::new(pointer_listener.as_ref().clone());
		modal.set(FormModal::new(pointer_source.clone(), WindowAlert));

		// The listener has to come off the document before the closure backing it is dropped.
		on_cleanup(ctx, {
			let mut pointer_source = pointer_source;
			move || {
				pointer_source.unsubscribe();
				drop(pointer_listener);
			}
		});
	}

	let is_open = create_selector(ctx, move || modal.get().is_open());

	let open_handler = move |_event: WebEvent| {
		modal.modify().open();
	};

	view! {
		ctx,
		(if *is_open.get() {
			view! { ctx, ModalContent(modal=modal, content_ref=content_ref) }
		} else {
			view! {
				ctx,
				button(type="button", on:click=open_handler) { (config.trigger_label.clone()) }
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closed_modal_renders_only_the_trigger() {
		let html = sycamore::render_to_string(|ctx| {
			provide_context(ctx, ModalConfig::default());
			view! { ctx, FormModalView {} }
		});

		assert!(html.contains("Open Form"), "missing trigger button in {}", html);
		assert!(!html.contains("modal-content"), "content rendered while closed: {}", html);
		assert!(!html.contains("<input"), "inputs rendered while closed: {}", html);
	}

	#[test]
	fn open_modal_renders_four_typed_inputs() {
		let html = sycamore::render_to_string(|ctx| {
			provide_context(ctx, ModalConfig::default());
			let modal = create_ref(
				ctx,
				create_rc_signal(FormModal::new(DocumentPointerSource::inert(), WindowAlert)),
			);
			modal.modify().open();
			let content_ref = create_node_ref(ctx);
			view! { ctx, ModalContent(modal=modal, content_ref=content_ref) }
		});

		assert!(html.contains("modal-content"), "missing content in {}", html);
		assert!(html.contains("Submit"), "missing submit button in {}", html);
		assert_eq!(html.matches("<input").count(), 4, "{}", html);
		assert_eq!(html.matches("type=\"text\"").count(), 2, "{}", html);
		assert_eq!(html.matches("type=\"email\"").count(), 1, "{}", html);
		assert_eq!(html.matches("type=\"date\"").count(), 1, "{}", html);
		for id in ["username", "email", "phone", "dob"] {
			assert!(html.contains(&format!("id=\"{}\"", id)), "missing input {} in {}", id, html);
		}
	}
}
