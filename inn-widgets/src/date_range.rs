//! Checkin/checkout range taken from the picker's close string.

use crate::form_field::FormField;
use serde::Serialize;

/// Picker locale. Serializes to the flatpickr locale key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PickerLocale {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "default")]
    English,
}

impl PickerLocale {
    /// flatpickr locale key.
    pub fn code(&self) -> &'static str {
        match self {
            PickerLocale::Japanese => "ja",
            PickerLocale::English => "default",
        }
    }

    /// String the picker puts between the two dates of a range.
    pub fn range_separator(&self) -> &'static str {
        match self {
            PickerLocale::Japanese => " から ",
            PickerLocale::English => " to ",
        }
    }
}

/// A selected stay, or nothing.
///
/// Both dates are present or neither is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateRange {
    Selected { checkin: String, checkout: String },
    Cleared,
}

impl DateRange {
    /// Split a close string on `separator`.
    ///
    /// Anything other than exactly two non-empty tokens is `Cleared`.
    pub fn parse(date_str: &str, separator: &str) -> Self {
        let tokens: Vec<&str> = date_str.split(separator).collect();
        match tokens.as_slice() {
            [checkin, checkout] if !checkin.is_empty() && !checkout.is_empty() => {
                DateRange::Selected {
                    checkin: checkin.to_string(),
                    checkout: checkout.to_string(),
                }
            }
            _ => DateRange::Cleared,
        }
    }

    pub fn checkin(&self) -> &str {
        match self {
            DateRange::Selected { checkin, .. } => checkin,
            DateRange::Cleared => "",
        }
    }

    pub fn checkout(&self) -> &str {
        match self {
            DateRange::Selected { checkout, .. } => checkout,
            DateRange::Cleared => "",
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, DateRange::Selected { .. })
    }
}

/// Distributes the picker's output into the checkin and checkout fields.
#[derive(Debug, Clone)]
pub struct DateRangeSelector<C: FormField, O: FormField> {
    locale: PickerLocale,
    checkin: C,
    checkout: O,
}

impl<C: FormField, O: FormField> DateRangeSelector<C, O> {
    pub fn new(locale: PickerLocale, checkin: C, checkout: O) -> Self {
        Self {
            locale,
            checkin,
            checkout,
        }
    }

    pub fn locale(&self) -> PickerLocale {
        self.locale
    }

    /// Handle the picker's close event.
    pub fn on_close(&mut self, date_str: &str) -> DateRange {
        let range = DateRange::parse(date_str, self.locale.range_separator());
        match &range {
            DateRange::Selected { checkin, checkout } => {
                self.checkin.set_value(checkin);
                self.checkout.set_value(checkout);
                log::info!("Stay selected: {} -> {}", checkin, checkout);
            }
            DateRange::Cleared => {
                self.checkin.clear();
                self.checkout.clear();
                if !date_str.is_empty() {
                    log::warn!("Unrecognized date range {:?}, clearing stay", date_str);
                }
            }
        }
        range
    }

    pub fn checkin(&self) -> &C {
        &self.checkin
    }

    pub fn checkout(&self) -> &O {
        &self.checkout
    }
}
