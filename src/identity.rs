//! Survey identity - visit-level metadata shared by every record in a collection.
//!
//! The editing surface works with ISO dates (`YYYY-MM-DD`) and 24-hour times
//! (`HH:MM`); records store `DD/MM/YYYY` and `HH.MM`. The conversion helpers in
//! this module are the only place that translates between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata describing one survey visit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyIdentity {
    pub hotel_name: String,
    pub address: String,
    pub sector: String,
    pub surveyor: String,
    /// Stored as `DD/MM/YYYY`.
    pub date: String,
    /// Stored as `HH.MM`.
    pub time: String,
}

impl SurveyIdentity {
    pub fn get(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::HotelName => &self.hotel_name,
            IdentityField::Address => &self.address,
            IdentityField::Sector => &self.sector,
            IdentityField::Surveyor => &self.surveyor,
            IdentityField::Date => &self.date,
            IdentityField::Time => &self.time,
        }
    }

    pub fn set(&mut self, field: IdentityField, value: impl Into<String>) {
        let value = value.into();
        match field {
            IdentityField::HotelName => self.hotel_name = value,
            IdentityField::Address => self.address = value,
            IdentityField::Sector => self.sector = value,
            IdentityField::Surveyor => self.surveyor = value,
            IdentityField::Date => self.date = value,
            IdentityField::Time => self.time = value,
        }
    }

    /// Date in edit format (`YYYY-MM-DD`).
    pub fn edit_date(&self) -> String {
        date_to_edit(&self.date)
    }

    /// Time in edit format (`HH:MM`).
    pub fn edit_time(&self) -> String {
        time_to_edit(&self.time)
    }
}

/// Names one of the six identity fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentityField {
    HotelName,
    Address,
    Sector,
    Surveyor,
    Date,
    Time,
}

impl IdentityField {
    pub const ALL: [IdentityField; 6] = [
        IdentityField::HotelName,
        IdentityField::Address,
        IdentityField::Sector,
        IdentityField::Surveyor,
        IdentityField::Date,
        IdentityField::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityField::HotelName => "hotelName",
            IdentityField::Address => "address",
            IdentityField::Sector => "sector",
            IdentityField::Surveyor => "surveyor",
            IdentityField::Date => "date",
            IdentityField::Time => "time",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value coming from the editing surface for one identity field.
///
/// `Date` and `Time` carry edit-format values and are converted to the storage
/// format by [`IdentityInput::into_storage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityInput {
    HotelName(String),
    Address(String),
    Sector(String),
    Surveyor(String),
    /// ISO `YYYY-MM-DD`, or empty.
    Date(String),
    /// 24-hour `HH:MM`, or empty.
    Time(String),
}

impl IdentityInput {
    pub fn field(&self) -> IdentityField {
        match self {
            IdentityInput::HotelName(_) => IdentityField::HotelName,
            IdentityInput::Address(_) => IdentityField::Address,
            IdentityInput::Sector(_) => IdentityField::Sector,
            IdentityInput::Surveyor(_) => IdentityField::Surveyor,
            IdentityInput::Date(_) => IdentityField::Date,
            IdentityInput::Time(_) => IdentityField::Time,
        }
    }

    /// Split into the targeted field and its storage-format value.
    pub fn into_storage(self) -> (IdentityField, String) {
        let field = self.field();
        let value = match self {
            IdentityInput::Date(value) => date_to_storage(&value),
            IdentityInput::Time(value) => time_to_storage(&value),
            IdentityInput::HotelName(value)
            | IdentityInput::Address(value)
            | IdentityInput::Sector(value)
            | IdentityInput::Surveyor(value) => value,
        };
        (field, value)
    }
}

/// `YYYY-MM-DD` -> `DD/MM/YYYY`. Empty stays empty; anything without exactly
/// three `-` separated parts is returned unchanged.
pub fn date_to_storage(edit: &str) -> String {
    match split3(edit, '-') {
        Some((year, month, day)) => format!("{}/{}/{}", day, month, year),
        None => edit.to_string(),
    }
}

/// `DD/MM/YYYY` -> `YYYY-MM-DD`. Inverse of [`date_to_storage`].
pub fn date_to_edit(stored: &str) -> String {
    match split3(stored, '/') {
        Some((day, month, year)) => format!("{}-{}-{}", year, month, day),
        None => stored.to_string(),
    }
}

/// `HH:MM` -> `HH.MM`.
pub fn time_to_storage(edit: &str) -> String {
    edit.replacen(':', ".", 1)
}

/// `HH.MM` -> `HH:MM`.
pub fn time_to_edit(stored: &str) -> String {
    stored.replacen('.', ":", 1)
}

fn split3(value: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = value.split(sep);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}
