//! Inn reservation and review forms
//!
//! Mounts two independent form sections:
//! 1. Reservation: a flatpickr range input that fills `checkinDate` and
//!    `checkoutDate`, plus the number of guests.
//! 2. Review: a five-star rating written to `score`, plus a comment. When the
//!    host page puts a stored review on the root element
//!    (`data-review-score`, `data-review-comment`) the section opens in edit
//!    mode with both pre-filled.
//!
//! flatpickr and its `ja` locale are loaded by the host page before the
//! WASM bundle; if they are missing the reservation section reports it.

use dioxus::prelude::*;
use inn_widgets::components::{DateRangeSelector, ErrorDisplay, StarRatingInput};
use inn_widgets::date_range::PickerLocale;
use inn_widgets::js_bridge;
use inn_widgets::review::{StoredReview, COMMENT_ATTRIBUTE, SCORE_ATTRIBUTE};
use inn_widgets::star_rating::Rating;
use inn_widgets::state::{ErrorSource, FormState};

/// DOM id of the element the app mounts into.
const ROOT_ID: &str = "booking-root";

/// DOM id for the flatpickr range input.
const RANGE_INPUT_ID: &str = "fromCheckinDateToCheckoutDate";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Review on record for the edit page, if the host provided one.
fn stored_review() -> Option<StoredReview> {
    let score = js_bridge::element_attribute(ROOT_ID, SCORE_ATTRIBUTE);
    let comment = js_bridge::element_attribute(ROOT_ID, COMMENT_ATTRIBUTE);
    StoredReview::from_attributes(score.as_deref(), comment.as_deref())
}

#[component]
fn App() -> Element {
    let state = use_context_provider(FormState::new);
    let existing = use_hook(stored_review);
    let messages = state.errors.read().messages();

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            for (source, message) in messages {
                ErrorDisplay { key: "{source:?}", source, message }
            }

            ReservationSection {}
            ReviewSection { existing }
        }
    }
}

/// Reservation form: stay dates and number of guests.
#[component]
fn ReservationSection() -> Element {
    let mut state = use_context::<FormState>();
    let guests = (state.number_of_people)();

    rsx! {
        form {
            style: "margin-bottom: 24px; padding-bottom: 12px; border-bottom: 1px solid #e0e0e0;",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                let checkin = (state.checkin_date)();
                let checkout = (state.checkout_date)();
                if checkin.is_empty() || checkout.is_empty() {
                    state.errors.write().set(
                        ErrorSource::Reservation,
                        "Please select checkin and checkout dates.",
                    );
                    return;
                }
                state.errors.write().clear(ErrorSource::Reservation);
                log::info!(
                    "Reservation input: {} -> {}, {} guest(s)",
                    checkin,
                    checkout,
                    (state.number_of_people)()
                );
            },
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Reserve" }
            DateRangeSelector {
                input_id: RANGE_INPUT_ID.to_string(),
                checkin: state.checkin_date,
                checkout: state.checkout_date,
                locale: PickerLocale::Japanese,
            }
            label {
                style: "font-weight: bold;",
                "Guests: "
                input {
                    r#type: "number",
                    name: "numberOfPeople",
                    min: "1",
                    value: "{guests}",
                    style: "width: 60px;",
                    onchange: move |evt: Event<FormData>| state.number_of_people.set(evt.value()),
                }
            }
            button { r#type: "submit", style: "margin-left: 12px;", "Check availability" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReviewSectionProps {
    /// Review being edited; `None` posts a new one
    #[props(!optional)]
    existing: Option<StoredReview>,
}

/// Review form: star rating and comment. Opens pre-filled when editing.
#[component]
fn ReviewSection(props: ReviewSectionProps) -> Element {
    let mut state = use_context::<FormState>();
    let editing = props.existing.is_some();
    let initial = props.existing.as_ref().map(|review| review.score);

    let existing = props.existing.clone();
    use_hook(move || {
        if let Some(review) = existing {
            state.comment.set(review.comment);
        }
    });

    let comment = (state.comment)();
    let (heading, submit_label) = if editing {
        ("Edit review", "Update review")
    } else {
        ("Review", "Post review")
    };

    rsx! {
        form {
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                match Rating::from_field(&(state.score)()) {
                    Ok(rating) => {
                        state.errors.write().clear(ErrorSource::Review);
                        log::info!(
                            "Review {}: {} star(s)",
                            if editing { "update" } else { "input" },
                            rating
                        );
                    }
                    Err(e) => {
                        log::warn!("Review rejected: {}", e);
                        state.errors.write().set(ErrorSource::Review, e.to_string());
                    }
                }
            },
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "{heading}" }
            StarRatingInput { field: state.score, initial }
            textarea {
                name: "comment",
                rows: "4",
                style: "width: 100%; margin-top: 8px;",
                value: "{comment}",
                oninput: move |evt: Event<FormData>| state.comment.set(evt.value()),
            }
            button { r#type: "submit", "{submit_label}" }
        }
    }
}
