//! Form state managed via Dioxus context.
//!
//! `FormState` bundles the reactive form fields into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<FormState>()`.

use dioxus::prelude::*;

/// Where an error message came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSource {
    DatePicker,
    Reservation,
    Review,
}

impl ErrorSource {
    pub const ALL: [ErrorSource; 3] = [
        ErrorSource::DatePicker,
        ErrorSource::Reservation,
        ErrorSource::Review,
    ];

    /// Heading shown above the message.
    pub fn heading(&self) -> &'static str {
        match self {
            ErrorSource::DatePicker => "Stay dates unavailable",
            ErrorSource::Reservation => "Reservation not sent",
            ErrorSource::Review => "Review not posted",
        }
    }
}

/// One pending message per source. Each form clears only its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    date_picker: Option<String>,
    reservation: Option<String>,
    review: Option<String>,
}

impl FormErrors {
    fn slot(&mut self, source: ErrorSource) -> &mut Option<String> {
        match source {
            ErrorSource::DatePicker => &mut self.date_picker,
            ErrorSource::Reservation => &mut self.reservation,
            ErrorSource::Review => &mut self.review,
        }
    }

    pub fn set(&mut self, source: ErrorSource, message: impl Into<String>) {
        *self.slot(source) = Some(message.into());
    }

    pub fn clear(&mut self, source: ErrorSource) {
        *self.slot(source) = None;
    }

    pub fn get(&self, source: ErrorSource) -> Option<&str> {
        match source {
            ErrorSource::DatePicker => self.date_picker.as_deref(),
            ErrorSource::Reservation => self.reservation.as_deref(),
            ErrorSource::Review => self.review.as_deref(),
        }
    }

    /// Pending messages in display order.
    pub fn messages(&self) -> Vec<(ErrorSource, String)> {
        ErrorSource::ALL
            .iter()
            .filter_map(|source| self.get(*source).map(|m| (*source, m.to_string())))
            .collect()
    }
}

/// Shared state for the reservation and review forms.
#[derive(Clone, Copy)]
pub struct FormState {
    /// `checkinDate` field
    pub checkin_date: Signal<String>,
    /// `checkoutDate` field
    pub checkout_date: Signal<String>,
    /// Number of guests
    pub number_of_people: Signal<String>,
    /// `score` field written by the star rating
    pub score: Signal<String>,
    /// Review comment
    pub comment: Signal<String>,
    /// Pending error messages, by source
    pub errors: Signal<FormErrors>,
}

impl FormState {
    /// Create a new FormState with empty fields.
    pub fn new() -> Self {
        Self {
            checkin_date: Signal::new(String::new()),
            checkout_date: Signal::new(String::new()),
            number_of_people: Signal::new("1".to_string()),
            score: Signal::new(String::new()),
            comment: Signal::new(String::new()),
            errors: Signal::new(FormErrors::default()),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearing_one_source_keeps_the_others() {
        let mut errors = FormErrors::default();
        errors.set(ErrorSource::DatePicker, "flatpickr is not loaded on this page");
        errors.set(ErrorSource::Review, "Please select a rating.");

        errors.clear(ErrorSource::Review);
        errors.clear(ErrorSource::Reservation);

        assert_eq!(
            errors.get(ErrorSource::DatePicker),
            Some("flatpickr is not loaded on this page")
        );
        assert_eq!(errors.get(ErrorSource::Review), None);
    }

    #[test]
    fn test_messages_in_display_order() {
        let mut errors = FormErrors::default();
        errors.set(ErrorSource::Review, "Please select a rating.");
        errors.set(ErrorSource::DatePicker, "Input element not found: #stay");
        let sources: Vec<ErrorSource> = errors.messages().into_iter().map(|(s, _)| s).collect();
        assert_eq!(sources, vec![ErrorSource::DatePicker, ErrorSource::Review]);
        assert!(FormErrors::default().messages().is_empty());
    }

    #[test]
    fn test_headings_are_distinct() {
        assert_eq!(ErrorSource::Review.heading(), "Review not posted");
        assert_ne!(
            ErrorSource::DatePicker.heading(),
            ErrorSource::Reservation.heading()
        );
    }
}
