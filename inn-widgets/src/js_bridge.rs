//! Typed wrappers around the `flatpickr` global.
//!
//! flatpickr is loaded by the host page as a plain `<script>` and exposed as
//! `window.flatpickr`. This module looks it up, passes it a serialized
//! `PickerConfig`, and wires `onClose` back into Rust.

use crate::error::{Result, WidgetError};
use crate::picker_config::PickerConfig;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type OnClose = dyn FnMut(JsValue, String, JsValue);

/// A live flatpickr instance. Destroys the instance when dropped.
pub struct FlatpickrHandle {
    instance: JsValue,
    _on_close: Closure<OnClose>,
}

impl Drop for FlatpickrHandle {
    fn drop(&mut self) {
        let destroy = Reflect::get(&self.instance, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            if let Err(e) = destroy.call0(&self.instance) {
                log::warn!("flatpickr destroy failed: {:?}", e);
            }
        }
    }
}

fn js_error(value: JsValue) -> WidgetError {
    WidgetError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// The page's `flatpickr` function.
pub fn flatpickr_global() -> Result<Function> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("flatpickr"))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| WidgetError::PickerUnavailable)
}

/// Look up an `<input>` by id.
pub fn find_input(id: &str) -> Result<web_sys::HtmlInputElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
        .ok_or_else(|| WidgetError::ElementNotFound(id.to_string()))
}

/// Attribute `name` of the element with id `id`, if both exist.
pub fn element_attribute(id: &str, name: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.get_attribute(name))
}

/// Attach flatpickr to `element`. `on_close` receives the picker's date string.
///
/// Fails when flatpickr is not loaded or the constructor throws.
pub fn attach_flatpickr<F>(
    element: &web_sys::HtmlInputElement,
    config: &PickerConfig,
    mut on_close: F,
) -> Result<FlatpickrHandle>
where
    F: FnMut(String) + 'static,
{
    let flatpickr = flatpickr_global()?;
    let options = js_sys::JSON::parse(&config.to_json()?).map_err(js_error)?;

    let closure = Closure::<OnClose>::new(
        move |_selected_dates: JsValue, date_str: String, _instance: JsValue| {
            on_close(date_str);
        },
    );
    Reflect::set(&options, &JsValue::from_str("onClose"), closure.as_ref()).map_err(js_error)?;

    let instance = flatpickr
        .call2(&JsValue::NULL, element.as_ref(), &options)
        .map_err(js_error)?;
    log::info!(
        "flatpickr attached to #{} (locale {}, max {})",
        element.id(),
        config.locale.code(),
        config.max_date
    );

    Ok(FlatpickrHandle {
        instance,
        _on_close: closure,
    })
}
