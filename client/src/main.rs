// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;
use sycamore::prelude::*;

mod alert;
mod app;
mod components;
mod config;
mod dom;
mod error;
mod pointer;
use app::App;
use config::{load_config, ModalConfig};

fn main() {
	console_error_panic_hook::set_once();

	let (config, config_error) = match load_config() {
		Ok(config) => (config, None),
		Err(error) => (ModalConfig::default(), Some(error)),
	};

	let (log_level, log_level_error) = match config.log_level() {
		Ok(level) => (level, None),
		Err(error) => (Level::Info, Some(error)),
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	if let Some(error) = config_error {
		log::error!("Failed to load configuration; using defaults: {}", error);
	}
	if let Some(error) = log_level_error {
		log::warn!(
			"Log level \"{}\" in the configuration isn't valid ({}); using info",
			config.log_level,
			error
		);
	}

	sycamore::render(|ctx| {
		provide_context(ctx, config);
		view! { ctx, App {} }
	});
}
