//! Form widgets for the inn booking pages.
//!
//! This crate provides:
//! - `date_range`: parsing of the picker's close string into checkin/checkout fields
//! - `picker_config`: the flatpickr option object (range mode, locale, booking window)
//! - `star_rating`: selected/hovered state machine for the rating icons
//! - `review`: the review on record, read back for the edit form
//! - `form_field`: the seam between widget logic and the fields it writes
//! - `js_bridge`: Rust wrappers for the `flatpickr` global via `wasm-bindgen`
//! - `state`: reactive FormState with Dioxus Signals
//! - `components`: RSX components rendering the widgets

pub mod components;
pub mod date_range;
pub mod error;
pub mod form_field;
pub mod js_bridge;
pub mod picker_config;
pub mod review;
pub mod star_rating;
pub mod state;

pub use error::{Result, WidgetError};
