//! [`Page`] over the browser DOM.

use pasteur_core::{FormFields, HiddenForm, Page, PasteurError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlFormElement, HtmlInputElement, Window};

/// The document the script was loaded into.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn current() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| PasteurError::Page("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PasteurError::Page("no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PasteurError::ElementNotFound(id.to_string()))
    }

    fn build_form(&self, form: &HiddenForm) -> Result<HtmlFormElement> {
        let element: HtmlFormElement = self
            .document
            .create_element("form")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| PasteurError::Page("created element is not a form".to_string()))?;
        element.set_method(form.method.as_str());
        element.set_action(&form.action);
        element.set_enctype(form.enctype());

        for (name, value) in form.fields.iter() {
            let input: HtmlInputElement = self
                .document
                .create_element("input")
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| PasteurError::Page("created element is not an input".to_string()))?;
            input.set_type("hidden");
            input.set_name(name);
            input.set_value(value);
            element.append_child(&input).map_err(js_error)?;
        }
        Ok(element)
    }
}

impl Page for DomPage {
    fn form_fields(&self, form_id: &str) -> Result<FormFields> {
        let form: HtmlFormElement = self
            .element(form_id)?
            .dyn_into()
            .map_err(|_| PasteurError::Page(format!("#{} is not a form", form_id)))?;
        let data = FormData::new_with_form(&form).map_err(js_error)?;

        let entries = js_sys::try_iter(&data)
            .map_err(js_error)?
            .ok_or_else(|| PasteurError::Page("form data is not iterable".to_string()))?;

        let mut fields = FormFields::new();
        for entry in entries {
            let pair: js_sys::Array = entry.map_err(js_error)?.unchecked_into();
            let Some(name) = pair.get(0).as_string() else {
                continue;
            };
            match pair.get(1).as_string() {
                Some(value) => {
                    fields.insert(name, value);
                }
                None => tracing::warn!(field = %name, "skipping non-text form field"),
            }
        }
        Ok(fields)
    }

    fn element_text(&self, element_id: &str) -> Result<String> {
        Ok(self.element(element_id)?.text_content().unwrap_or_default())
    }

    fn set_element_text(&mut self, element_id: &str, text: &str) -> Result<()> {
        self.element(element_id)?.set_text_content(Some(text));
        Ok(())
    }

    fn location(&self) -> Result<String> {
        self.window.location().href().map_err(js_error)
    }

    fn submit(&mut self, form: HiddenForm) -> Result<()> {
        let element = self.build_form(&form)?;
        let body = self
            .document
            .body()
            .ok_or_else(|| PasteurError::Page("document has no body".to_string()))?;
        body.append_child(&element).map_err(js_error)?;
        element.submit().map_err(js_error)
    }
}

fn js_error(value: JsValue) -> PasteurError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown JavaScript error".to_string());
    PasteurError::Page(message)
}
