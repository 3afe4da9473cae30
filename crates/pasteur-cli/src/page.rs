//! [`Page`] for the command line.
//!
//! The paste form is assembled from arguments, the ciphertext comes from a
//! file or a fetched page, and submission goes over HTTP unless this is a
//! dry run.

use std::collections::HashMap;

use pasteur_core::page::{OUTPUT_ELEMENT_ID, PASTE_FORM_ID, RAW_ELEMENT_ID};
use pasteur_core::{FormFields, HiddenForm, Page, PasteurError, Result};

use crate::transport::HttpTransport;

pub struct CliPage<'a> {
    location: String,
    paste_form: Option<FormFields>,
    elements: HashMap<&'static str, String>,
    transport: Option<&'a HttpTransport>,
    submitted: Option<HiddenForm>,
}

impl<'a> CliPage<'a> {
    /// A compose page holding the paste form. Without a transport the
    /// submitted form is only recorded.
    pub fn compose(fields: FormFields, transport: Option<&'a HttpTransport>) -> Self {
        Self {
            location: String::new(),
            paste_form: Some(fields),
            elements: HashMap::new(),
            transport,
            submitted: None,
        }
    }

    /// A view page at `location` publishing `ciphertext`.
    pub fn view(location: impl Into<String>, ciphertext: String) -> Self {
        let mut elements = HashMap::new();
        elements.insert(RAW_ELEMENT_ID, ciphertext);
        elements.insert(OUTPUT_ELEMENT_ID, String::new());
        Self {
            location: location.into(),
            paste_form: None,
            elements,
            transport: None,
            submitted: None,
        }
    }

    /// Where the page ended up; after a submission this is the paste link.
    pub fn current_location(&self) -> &str {
        &self.location
    }

    pub fn submitted(&self) -> Option<&HiddenForm> {
        self.submitted.as_ref()
    }

    pub fn output(&self) -> &str {
        self.elements
            .get(OUTPUT_ELEMENT_ID)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl Page for CliPage<'_> {
    fn form_fields(&self, form_id: &str) -> Result<FormFields> {
        match (&self.paste_form, form_id) {
            (Some(fields), PASTE_FORM_ID) => Ok(fields.clone()),
            _ => Err(PasteurError::ElementNotFound(form_id.to_string())),
        }
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
        self.location = match self.transport {
            Some(transport) => {
                let mut landed = transport
                    .submit(&form)
                    .map_err(|e| PasteurError::Page(e.to_string()))?;
                landed.set_fragment(form.fragment());
                landed.to_string()
            }
            None => form.action.clone(),
        };
        self.submitted = Some(form);
        Ok(())
    }
}
