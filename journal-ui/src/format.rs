//! Timestamp formatting

use wasm_bindgen::JsValue;

/// Shown when a timestamp cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Render epoch milliseconds in the browser's locale
pub fn format_timestamp(ms: &str) -> String {
    let Ok(ms) = ms.trim().parse::<f64>() else {
        return INVALID_DATE.to_string();
    };
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    if date.get_time().is_nan() {
        return INVALID_DATE.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
