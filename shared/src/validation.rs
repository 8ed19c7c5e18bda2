// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::FormState;
use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt;

pub const PHONE_NUMBER_DIGITS: usize = 10;

/// The reason a form submission was rejected
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	NothingEntered,
	InvalidEmail,
	InvalidPhone,
	FutureDateOfBirth,
	MissingUsername,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NothingEntered | Self::MissingUsername => write!(f, "Please fill out the Username field."),
			Self::InvalidEmail => write!(f, "Invalid email. Please check your email address."),
			Self::InvalidPhone => write!(f, "Invalid phone number. Please enter a 10-digit phone number."),
			Self::FutureDateOfBirth => write!(f, "Invalid date of birth. Date of birth cannot be in the future."),
		}
	}
}

impl Error for ValidationError {}

/// Checks the form against each rule in order, stopping at the first one that fails.
///
/// Email, phone, and date of birth are optional; they're only checked when they have a value. The username is
/// checked last, so a form with only a (valid) phone number reports the missing username rather than passing.
pub fn validate_form(form: &FormState, today: NaiveDate) -> Result<(), ValidationError> {
	if form.is_blank() {
		return Err(ValidationError::NothingEntered);
	}
	if !form.email.is_empty() && !is_valid_email(&form.email) {
		return Err(ValidationError::InvalidEmail);
	}
	if !form.phone.is_empty() && !is_valid_phone(&form.phone) {
		return Err(ValidationError::InvalidPhone);
	}
	if !form.dob.is_empty() && is_future_date(&form.dob, today) {
		return Err(ValidationError::FutureDateOfBirth);
	}
	if form.username.trim().is_empty() {
		return Err(ValidationError::MissingUsername);
	}
	Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
	email.contains('@')
}

pub fn is_valid_phone(phone: &str) -> bool {
	phone.len() == PHONE_NUMBER_DIGITS && phone.bytes().all(|c| c.is_ascii_digit())
}

/// Whether the date is after `today`. A value that isn't a date is never in the future.
pub fn is_future_date(date: &str, today: NaiveDate) -> bool {
	match parse_date_value(date) {
		Some(date) => date > (i64::from(today.year()), today.month(), today.day()),
		None => false,
	}
}

/// Splits a date input value (`YYYY-MM-DD`) into its year, month, and day.
///
/// Date inputs allow years past 9999 (up to 275760), so the year may have more than four digits.
fn parse_date_value(date: &str) -> Option<(i64, u32, u32)> {
	let mut parts = date.split('-');
	let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
		return None;
	};
	let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|c| c.is_ascii_digit());
	if year.len() < 4 || month.len() != 2 || day.len() != 2 || ![year, month, day].into_iter().all(all_digits) {
		return None;
	}

	let year: i64 = year.parse().ok()?;
	let month: u32 = month.parse().ok()?;
	let day: u32 = day.parse().ok()?;
	if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
		return None;
	}
	Some((year, month, day))
}
