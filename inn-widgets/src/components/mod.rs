//! Dioxus RSX components for the booking forms.

mod date_range_selector;
mod error_display;
mod star_rating;

pub use date_range_selector::DateRangeSelector;
pub use error_display::ErrorDisplay;
pub use star_rating::StarRatingInput;
