// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::form_modal::FormModalView;
use crate::config::ModalConfig;
use sycamore::prelude::*;

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &ModalConfig = use_context(ctx);

	view! {
		ctx,
		div(class="app-container") {
			h1(class="app-heading") { (config.heading.clone()) }
			FormModalView {}
		}
	}
}
