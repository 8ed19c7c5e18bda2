// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::PlatformError;
use web_sys::{window, Document, Window};

pub fn browser_window() -> Result<Window, PlatformError> {
	window().ok_or(PlatformError::NoWindow)
}

pub fn browser_document() -> Result<Document, PlatformError> {
	browser_window()?.document().ok_or(PlatformError::NoDocument)
}
