// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;
use log::{Level, ParseLevelError};

const CONFIG_FILE_NAME: &str = "config.kdl";
const EMBEDDED_CONFIG: &str = include_str!("../config.kdl");

const DEFAULT_HEADING: &str = "User Details Modal";
const DEFAULT_TRIGGER_LABEL: &str = "Open Form";
const DEFAULT_SUBMIT_LABEL: &str = "Submit";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Decode)]
pub struct ModalConfig {
	#[knuffel(child, unwrap(argument), default = String::from(DEFAULT_HEADING))]
	pub heading: String,
	#[knuffel(child, unwrap(argument), default = String::from(DEFAULT_TRIGGER_LABEL))]
	pub trigger_label: String,
	#[knuffel(child, unwrap(argument), default = String::from(DEFAULT_SUBMIT_LABEL))]
	pub submit_label: String,
	#[knuffel(child, unwrap(argument), default = String::from(DEFAULT_LOG_LEVEL))]
	pub log_level: String,
}

impl ModalConfig {
	pub fn log_level(&self) -> Result<Level, ParseLevelError> {
		self.log_level.parse()
	}
}

impl Default for ModalConfig {
	fn default() -> Self {
		Self {
			heading: String::from(DEFAULT_HEADING),
			trigger_label: String::from(DEFAULT_TRIGGER_LABEL),
			submit_label: String::from(DEFAULT_SUBMIT_LABEL),
			log_level: String::from(DEFAULT_LOG_LEVEL),
		}
	}
}

pub fn parse_config(file_name: &str, config_text: &str) -> Result<ModalConfig, knuffel::Error> {
	knuffel::parse(file_name, config_text)
}

/// Reads the configuration that was built into the client.
pub fn load_config() -> Result<ModalConfig, knuffel::Error> {
	parse_config(CONFIG_FILE_NAME, EMBEDDED_CONFIG)
}
