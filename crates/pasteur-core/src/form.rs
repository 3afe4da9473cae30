//! Form payloads and the transient hidden-field form used to submit them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PasteurError;

/// Encoding type every submitted form uses.
pub const MULTIPART_ENCTYPE: &str = "multipart/form-data";

/// Ordered mapping of form field names to string values.
///
/// Inserting an existing name replaces its value but keeps its original
/// position, the same way assigning to a plain object key does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    #[default]
    Post,
    Get,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Post => "post",
            FormMethod::Get => "get",
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMethod {
    type Err = PasteurError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(FormMethod::Post),
            "get" => Ok(FormMethod::Get),
            other => Err(PasteurError::InvalidInput(format!(
                "Unsupported form method \"{}\" (expected post or get)",
                other
            ))),
        }
    }
}

/// A transient form with one hidden input per field.
///
/// Submitting it navigates to `action`; the page that built it is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenForm {
    pub action: String,
    pub method: FormMethod,
    pub fields: FormFields,
}

impl HiddenForm {
    /// Build a form posting `fields` to `action`.
    pub fn new(action: impl Into<String>, fields: FormFields) -> Self {
        Self {
            action: action.into(),
            method: FormMethod::default(),
            fields,
        }
    }

    pub fn with_method(mut self, method: FormMethod) -> Self {
        self.method = method;
        self
    }

    pub fn enctype(&self) -> &'static str {
        MULTIPART_ENCTYPE
    }

    /// The action with any `#fragment` removed, which is what actually goes
    /// over the wire.
    pub fn request_path(&self) -> &str {
        self.action
            .split_once('#')
            .map_or(self.action.as_str(), |(path, _)| path)
    }

    /// The fragment of the action, without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.action.split_once('#').map(|(_, fragment)| fragment)
    }

    /// Render the form as HTML markup with every attribute escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<form method=\"{}\" action=\"{}\" enctype=\"{}\">\n",
            self.method,
            escape_attribute(&self.action),
            self.enctype()
        );
        for (name, value) in self.fields.iter() {
            html.push_str(&format!(
                "  <input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                escape_attribute(name),
                escape_attribute(value)
            ));
        }
        html.push_str("</form>\n");
        html
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_order_and_last_value() {
        let fields: FormFields = vec![
            ("title", "first"),
            ("paste", "body"),
            ("title", "second"),
            ("lang", "rust"),
        ]
        .into_iter()
        .collect();

        let collected: Vec<_> = fields.iter().collect();
        assert_eq!(
            collected,
            vec![("title", "second"), ("paste", "body"), ("lang", "rust")]
        );
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut fields = FormFields::new();
        assert_eq!(fields.insert("paste", "a"), None);
        assert_eq!(fields.insert("paste", "b"), Some("a".to_string()));
        assert_eq!(fields.get("paste"), Some("b"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("POST".parse::<FormMethod>().unwrap(), FormMethod::Post);
        assert_eq!("get".parse::<FormMethod>().unwrap(), FormMethod::Get);
        assert!("delete".parse::<FormMethod>().is_err());
        assert_eq!(FormMethod::default(), FormMethod::Post);
    }

    #[test]
    fn test_request_path_strips_fragment() {
        let form = HiddenForm::new("/#a2V5", FormFields::new());
        assert_eq!(form.request_path(), "/");
        assert_eq!(form.fragment(), Some("a2V5"));

        let plain = HiddenForm::new("/submit", FormFields::new());
        assert_eq!(plain.request_path(), "/submit");
        assert_eq!(plain.fragment(), None);
    }

    #[test]
    fn test_to_html_escapes_values() {
        let fields: FormFields = vec![("paste", "{\"ct\":\"a<b>&c\"}")].into_iter().collect();
        let html = HiddenForm::new("/#k+/=", fields)
            .with_method(FormMethod::Get)
            .to_html();

        assert!(html.starts_with(
            "<form method=\"get\" action=\"/#k+/=\" enctype=\"multipart/form-data\">"
        ));
        assert!(html.contains(
            "<input type=\"hidden\" name=\"paste\" value=\"{&quot;ct&quot;:&quot;a&lt;b&gt;&amp;c&quot;}\">"
        ));
        assert!(html.trim_end().ends_with("</form>"));
    }
}
