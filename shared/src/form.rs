// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the inputs in the user details form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormField {
	Username,
	Email,
	Phone,
	DateOfBirth,
}

impl FormField {
	/// All fields, in the order they're displayed
	pub const ALL: [FormField; 4] = [Self::Username, Self::Email, Self::Phone, Self::DateOfBirth];

	/// The element ID of the input for this field
	pub fn id(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::DateOfBirth => "dob",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Username => "Username:",
			Self::Email => "Email:",
			Self::Phone => "Phone Number:",
			Self::DateOfBirth => "Date of Birth:",
		}
	}

	/// The HTML input type used to enter this field
	pub fn input_type(&self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::DateOfBirth => "date",
			Self::Username | Self::Phone => "text",
		}
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownFieldError(String);

impl fmt::Display for UnknownFieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Self(id) = self;
		write!(f, "no form field has the ID \"{}\"", id)
	}
}

impl Error for UnknownFieldError {}

impl FromStr for FormField {
	type Err = UnknownFieldError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|field| field.id() == s)
			.ok_or_else(|| UnknownFieldError(s.to_string()))
	}
}

/// Values of the form inputs before submission
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
	pub username: String,
	pub email: String,
	pub phone: String,
	pub dob: String,
}

impl FormState {
	pub fn value(&self, field: FormField) -> &str {
		match field {
			FormField::Username => &self.username,
			FormField::Email => &self.email,
			FormField::Phone => &self.phone,
			FormField::DateOfBirth => &self.dob,
		}
	}

	/// Replaces the value of one field. The other fields are left alone.
	pub fn set(&mut self, field: FormField, value: String) {
		let slot = match field {
			FormField::Username => &mut self.username,
			FormField::Email => &mut self.email,
			FormField::Phone => &mut self.phone,
			FormField::DateOfBirth => &mut self.dob,
		};
		*slot = value;
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Whether every field is empty once surrounding whitespace is ignored
	pub fn is_blank(&self) -> bool {
		FormField::ALL
			.into_iter()
			.all(|field| self.value(field).trim().is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn field_ids_parse_back_to_fields() {
		for field in FormField::ALL {
			assert_eq!(field.id().parse::<FormField>(), Ok(field));
		}
	}

	#[test]
	fn unknown_field_id_is_rejected() {
		let error = "address".parse::<FormField>().unwrap_err();
		assert_eq!(error.to_string(), "no form field has the ID \"address\"");
		assert!("Username".parse::<FormField>().is_err());
	}

	#[test]
	fn input_types_match_field_kinds() {
		let types: Vec<&str> = FormField::ALL.iter().map(|field| field.input_type()).collect();
		assert_eq!(types, vec!["text", "email", "text", "date"]);
	}

	#[test]
	fn set_only_touches_one_field() {
		let mut form = FormState {
			username: String::from("bob"),
			email: String::from("bob@example.com"),
			phone: String::new(),
			dob: String::from("1990-04-01"),
		};
		form.set(FormField::Phone, String::from("555"));

		assert_eq!(form.username, "bob");
		assert_eq!(form.email, "bob@example.com");
		assert_eq!(form.phone, "555");
		assert_eq!(form.dob, "1990-04-01");
	}

	#[test]
	fn whitespace_only_form_is_blank() {
		let mut form = FormState::default();
		assert!(form.is_blank());

		form.set(FormField::Email, String::from("   "));
		form.set(FormField::DateOfBirth, String::from("\t"));
		assert!(form.is_blank());

		form.set(FormField::Username, String::from(" a "));
		assert!(!form.is_blank());
	}

	#[test]
	fn clear_resets_everything() {
		let mut form = FormState::default();
		for field in FormField::ALL {
			form.set(field, String::from("x"));
		}
		form.clear();
		assert_eq!(form, FormState::default());
	}
}
