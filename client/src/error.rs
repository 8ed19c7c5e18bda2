// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use wasm_bindgen::JsValue;

/// Failures from the browser APIs the page relies on
#[derive(Debug)]
pub enum PlatformError {
	NoWindow,
	NoDocument,
	Js(String),
}

impl From<JsValue> for PlatformError {
	fn from(error: JsValue) -> Self {
		let description = error.as_string().unwrap_or_else(|| format!("{:?}", error));
		Self::Js(description)
	}
}

impl fmt::Display for PlatformError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "no browser window is available"),
			Self::NoDocument => write!(f, "the browser window has no document"),
			Self::Js(error) => write!(f, "a browser call failed: {}", error),
		}
	}
}

impl Error for PlatformError {}
