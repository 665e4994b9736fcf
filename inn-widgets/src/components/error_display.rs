//! Booking form error box.

use crate::state::ErrorSource;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Which part of the page failed
    pub source: ErrorSource,
    pub message: String,
}

/// Shows a form or picker error under the heading of its source.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let heading = props.source.heading();

    rsx! {
        div {
            class: "alert alert-danger",
            role: "alert",
            style: "padding: 8px 12px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-left: 4px solid #FF7043;",
            p {
                style: "margin: 0 0 2px 0; font-weight: bold; font-size: 13px;",
                "{heading}"
            }
            p {
                style: "margin: 0; font-size: 13px;",
                "{props.message}"
            }
        }
    }
}
