//! The page the handlers run against.
//!
//! In a browser this is the DOM; on the command line it is stdin, files and
//! an HTTP client. Handlers only see this trait.

use std::collections::HashMap;

use crate::error::{PasteurError, Result};
use crate::form::{FormFields, HiddenForm};

/// Id of the form holding the paste and its metadata fields.
pub const PASTE_FORM_ID: &str = "pasteur";

/// Name of the form field carrying the paste body.
pub const PASTE_FIELD: &str = "paste";

/// Id of the element holding the published ciphertext.
pub const RAW_ELEMENT_ID: &str = "raw";

/// Id of the element the decrypted paste is written into.
pub const OUTPUT_ELEMENT_ID: &str = "output";

/// Path encrypted pastes are submitted to.
pub const SUBMIT_PATH: &str = "/";

/// Access to the page a handler is running on.
pub trait Page {
    /// All fields of the form with the given id, in document order.
    fn form_fields(&self, form_id: &str) -> Result<FormFields>;

    /// Text content of the element with the given id.
    fn element_text(&self, element_id: &str) -> Result<String>;

    /// Replace the content of the element with the given id with `text`.
    fn set_element_text(&mut self, element_id: &str, text: &str) -> Result<()>;

    /// The current location, including its fragment.
    fn location(&self) -> Result<String>;

    /// Attach the form to the page and submit it.
    fn submit(&mut self, form: HiddenForm) -> Result<()>;
}

/// A page held entirely in memory.
///
/// Submitted forms are recorded rather than sent anywhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryPage {
    pub location: String,
    pub forms: HashMap<String, FormFields>,
    pub elements: HashMap<String, String>,
    pub submitted: Vec<HiddenForm>,
}

impl MemoryPage {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_form(mut self, form_id: impl Into<String>, fields: FormFields) -> Self {
        self.forms.insert(form_id.into(), fields);
        self
    }

    pub fn with_element(mut self, element_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.elements.insert(element_id.into(), text.into());
        self
    }

    /// The most recently submitted form.
    pub fn last_submitted(&self) -> Option<&HiddenForm> {
        self.submitted.last()
    }
}

impl Page for MemoryPage {
    fn form_fields(&self, form_id: &str) -> Result<FormFields> {
        self.forms
            .get(form_id)
            .cloned()
            .ok_or_else(|| PasteurError::ElementNotFound(form_id.to_string()))
    }

    fn element_text(&self, element_id: &str) -> Result<String> {
        self.elements
            .get(element_id)
            .cloned()
            .ok_or_else(|| PasteurError::ElementNotFound(element_id.to_string()))
    }

    fn set_element_text(&mut self, element_id: &str, text: &str) -> Result<()> {
        match self.elements.get_mut(element_id) {
            Some(content) => {
                *content = text.to_string();
                Ok(())
            }
            None => Err(PasteurError::ElementNotFound(element_id.to_string())),
        }
    }

    fn location(&self) -> Result<String> {
        Ok(self.location.clone())
    }

    fn submit(&mut self, form: HiddenForm) -> Result<()> {
        self.location = form.action.clone();
        self.submitted.push(form);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_elements_are_errors() {
        let mut page = MemoryPage::new("/");

        assert!(matches!(
            page.form_fields(PASTE_FORM_ID),
            Err(PasteurError::ElementNotFound(id)) if id == "pasteur"
        ));
        assert!(page.element_text(RAW_ELEMENT_ID).is_err());
        assert!(page.set_element_text(OUTPUT_ELEMENT_ID, "x").is_err());
    }

    #[test]
    fn test_submit_navigates() {
        let mut page = MemoryPage::new("/new");
        page.submit(HiddenForm::new("/#abc", FormFields::new())).unwrap();

        assert_eq!(page.location().unwrap(), "/#abc");
        assert_eq!(page.submitted.len(), 1);
    }
}
