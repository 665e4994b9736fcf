//! Option object handed to `flatpickr(element, options)`.

use crate::date_range::PickerLocale;
use crate::error::Result;
use chrono::NaiveDate;
use inn_utils::dates;
use serde::Serialize;

/// How far ahead a stay can be booked.
pub const BOOKING_WINDOW_MONTHS: u32 = 3;

/// flatpickr keyword for the current day.
pub const MIN_DATE_TODAY: &str = "today";

/// flatpickr format string matching `dates::DATE_FORMAT`.
pub const PICKER_DATE_FORMAT: &str = "Y-m-d";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multiple,
    #[default]
    Range,
}

/// Serializes with flatpickr's option names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    pub mode: SelectionMode,
    pub locale: PickerLocale,
    pub min_date: String,
    pub max_date: String,
    pub date_format: String,
}

impl PickerConfig {
    /// Range picker from today through today + `BOOKING_WINDOW_MONTHS`.
    pub fn booking_window(today: NaiveDate, locale: PickerLocale) -> Result<Self> {
        let horizon = dates::booking_horizon(today, BOOKING_WINDOW_MONTHS)?;
        Ok(Self {
            mode: SelectionMode::Range,
            locale,
            min_date: MIN_DATE_TODAY.to_string(),
            max_date: dates::format_date(&horizon),
            date_format: PICKER_DATE_FORMAT.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
