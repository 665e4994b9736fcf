//! Range input backed by flatpickr, with checkin/checkout fields.

use crate::date_range::{DateRangeSelector as RangeFields, PickerLocale};
use crate::js_bridge::{self, FlatpickrHandle};
use crate::picker_config::PickerConfig;
use crate::state::{ErrorSource, FormState};
use dioxus::prelude::*;
use futures::StreamExt;
use inn_utils::dates;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangeSelectorProps {
    /// DOM id of the text input flatpickr binds to
    pub input_id: String,
    /// Field receiving the first date
    pub checkin: Signal<String>,
    /// Field receiving the second date
    pub checkout: Signal<String>,
    #[props(default)]
    pub locale: PickerLocale,
}

/// Stay picker. Attaches flatpickr once mounted and writes the closed
/// selection into `checkinDate` and `checkoutDate`.
///
/// flatpickr calls back from outside the Dioxus runtime, so close strings
/// are forwarded through a coroutine before touching the field signals.
#[component]
pub fn DateRangeSelector(props: DateRangeSelectorProps) -> Element {
    let mut state = use_context::<FormState>();
    let mut picker: Signal<Option<FlatpickrHandle>> = use_signal(|| None);

    let input_id = props.input_id.clone();
    let checkin = props.checkin;
    let checkout = props.checkout;
    let locale = props.locale;

    let closes = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        let mut fields = RangeFields::new(locale, checkin, checkout);
        while let Some(date_str) = rx.next().await {
            fields.on_close(&date_str);
        }
    });

    use_effect(move || {
        if picker.peek().is_some() {
            return;
        }

        let attached = PickerConfig::booking_window(dates::today(), locale).and_then(|config| {
            let input = js_bridge::find_input(&input_id)?;
            js_bridge::attach_flatpickr(&input, &config, move |date_str| {
                closes.send(date_str);
            })
        });

        match attached {
            Ok(handle) => {
                picker.set(Some(handle));
                state.errors.write().clear(ErrorSource::DatePicker);
            }
            Err(e) => {
                log::error!("Date range picker unavailable: {}", e);
                state.errors.write().set(ErrorSource::DatePicker, e.to_string());
            }
        }
    });

    let checkin_value = (props.checkin)();
    let checkout_value = (props.checkout)();

    rsx! {
        div {
            class: "date-range-selector",
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 8px;",
            label {
                r#for: "{props.input_id}",
                style: "font-weight: bold;",
                "Stay"
            }
            input {
                id: "{props.input_id}",
                r#type: "text",
                readonly: true,
                placeholder: "Select checkin and checkout",
            }
            div {
                style: "display: flex; gap: 12px;",
                label {
                    "Checkin: "
                    input {
                        r#type: "text",
                        name: "checkinDate",
                        readonly: true,
                        value: "{checkin_value}",
                    }
                }
                label {
                    "Checkout: "
                    input {
                        r#type: "text",
                        name: "checkoutDate",
                        readonly: true,
                        value: "{checkout_value}",
                    }
                }
            }
        }
    }
}
