//! # Pasteur Web
//!
//! Browser bindings for Pasteur. Load the generated module on the compose and
//! view pages and call the exported handlers from UI events:
//!
//! ```js
//! import init, { doEncrypt, doDecrypt } from "./pasteur_web.js";
//! await init();
//! document.getElementById("send").onclick = () => doEncrypt();
//! ```
//!
//! Failures are thrown as JavaScript errors.

mod dom;

use pasteur_core::{FormFields, FormMethod, Paranoia, PasteurError};
use wasm_bindgen::prelude::*;

use crate::dom::DomPage;

/// Paranoia level used when the caller does not pass one.
const DEFAULT_PARANOIA: u8 = 0;

/// Submit `params` to `path` through a transient hidden-field form.
///
/// `method` defaults to `"post"`.
#[wasm_bindgen]
pub fn post(path: &str, params: &js_sys::Object, method: Option<String>) -> Result<(), JsValue> {
    let method = form_method(method.as_deref()).map_err(to_js)?;
    let entries_array = js_sys::Object::entries(params);
    let entries = entries_array.iter().map(|entry| {
        let pair: js_sys::Array = entry.unchecked_into();
        (pair.get(0).as_string(), ParamValue::from_js(&pair.get(1)))
    });
    let fields = fields_from_entries(entries);

    let mut page = DomPage::current().map_err(to_js)?;
    pasteur_core::post(&mut page, path, fields, method).map_err(to_js)
}

/// Encrypt the `#pasteur` form's paste and submit it with the key in the
/// URL fragment.
#[wasm_bindgen(js_name = doEncrypt)]
pub fn do_encrypt(paranoia: Option<u8>) -> Result<(), JsValue> {
    let paranoia = Paranoia::new(paranoia.unwrap_or(DEFAULT_PARANOIA)).map_err(to_js)?;
    let mut page = DomPage::current().map_err(to_js)?;
    pasteur_core::do_encrypt(&mut page, paranoia)
        .map(drop)
        .map_err(to_js)
}

/// Decrypt `#raw` with the key in the URL fragment into `#output`.
#[wasm_bindgen(js_name = doDecrypt)]
pub fn do_decrypt() -> Result<(), JsValue> {
    let mut page = DomPage::current().map_err(to_js)?;
    pasteur_core::do_decrypt(&mut page).map_err(to_js)
}

/// A parameter value as it arrives from JavaScript.
#[derive(Debug, Clone, PartialEq)]
enum ParamValue {
    Text(String),
    /// `null` or `undefined`
    Missing,
    /// Any other value, already passed through `String(value)`
    Coerced(String),
}

impl ParamValue {
    fn from_js(value: &JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return ParamValue::Text(text);
        }
        if value.is_undefined() || value.is_null() {
            return ParamValue::Missing;
        }
        ParamValue::Coerced(String::from(
            value.unchecked_ref::<js_sys::Object>().to_string(),
        ))
    }

    fn into_text(self) -> String {
        match self {
            ParamValue::Text(text) | ParamValue::Coerced(text) => text,
            ParamValue::Missing => String::new(),
        }
    }
}

/// Entries without a string name are skipped.
fn fields_from_entries<I>(entries: I) -> FormFields
where
    I: IntoIterator<Item = (Option<String>, ParamValue)>,
{
    entries
        .into_iter()
        .filter_map(|(name, value)| name.map(|name| (name, value.into_text())))
        .collect()
}

fn form_method(method: Option<&str>) -> pasteur_core::Result<FormMethod> {
    match method {
        Some(value) => value.parse(),
        None => Ok(FormMethod::default()),
    }
}

fn to_js(err: PasteurError) -> JsValue {
    JsError::new(&err.to_string()).into()
}
