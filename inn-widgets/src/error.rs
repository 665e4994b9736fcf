/// Error types for the booking widgets
use thiserror::Error;

/// Main error type for widget initialization and form checks
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The `flatpickr` global is not defined on the page
    #[error("flatpickr is not loaded on this page")]
    PickerUnavailable,

    /// The element the widget binds to does not exist
    #[error("Input element not found: #{0}")]
    ElementNotFound(String),

    /// A call into JavaScript threw
    #[error("JavaScript call failed: {0}")]
    Js(String),

    /// Picker options could not be serialized
    #[error("Failed to serialize picker config: {0}")]
    ConfigSerialize(#[from] serde_json::Error),

    /// The booking window could not be computed
    #[error("Invalid booking window: {0}")]
    BookingWindow(#[from] anyhow::Error),

    /// Rating value outside the icon set
    #[error("Rating {value} is outside 1..={max}")]
    RatingOutOfRange { value: u8, max: u8 },

    /// Review submitted without a rating
    #[error("Please select a rating.")]
    RatingMissing,
}

/// Type alias for Results using WidgetError
pub type Result<T> = std::result::Result<T, WidgetError>;
