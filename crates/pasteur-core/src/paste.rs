//! Encrypt-on-submit and decrypt-on-load handlers.
//!
//! Each handler has a pure half that works on plain values and a page half
//! that reads from and writes to a [`Page`].

use crate::crypto::{self, Envelope, Paranoia, PasteKey};
use crate::error::{PasteurError, Result};
use crate::form::{FormFields, FormMethod, HiddenForm};
use crate::fragment::{key_from_location, link_with_key};
use crate::page::{Page, OUTPUT_ELEMENT_ID, PASTE_FIELD, PASTE_FORM_ID, RAW_ELEMENT_ID, SUBMIT_PATH};

/// A form whose paste field has been replaced by ciphertext, together with
/// the key that opens it.
#[derive(Debug)]
pub struct SealedForm {
    pub form: HiddenForm,
    pub key: PasteKey,
}

/// Build a hidden form for `fields` and submit it on `page`.
pub fn post<P: Page + ?Sized>(
    page: &mut P,
    path: &str,
    fields: FormFields,
    method: FormMethod,
) -> Result<()> {
    let form = HiddenForm::new(path, fields).with_method(method);
    tracing::debug!(
        path = form.request_path(),
        method = %form.method,
        fields = form.fields.len(),
        "submitting form"
    );
    page.submit(form)
}

/// Encrypt the paste field of `fields` under a fresh key.
///
/// Every other field is carried over unchanged. The returned form posts to
/// the root path with the key appended as the fragment.
pub fn seal_form(mut fields: FormFields, paranoia: Paranoia) -> Result<SealedForm> {
    let key = PasteKey::generate(paranoia)?;

    let plaintext = fields
        .get(PASTE_FIELD)
        .ok_or_else(|| PasteurError::MissingField(PASTE_FIELD.to_string()))?;
    let envelope = crypto::encrypt(&key, plaintext)?;
    fields.insert(PASTE_FIELD, envelope.to_json()?);

    let form = HiddenForm::new(link_with_key(SUBMIT_PATH, &key), fields);
    Ok(SealedForm { form, key })
}

/// Read the paste form from `page`, seal it, and submit it.
///
/// Returns the key so callers can show or verify the link.
pub fn do_encrypt<P: Page + ?Sized>(page: &mut P, paranoia: Paranoia) -> Result<PasteKey> {
    let fields = page.form_fields(PASTE_FORM_ID)?;
    let SealedForm { form, key } = seal_form(fields, paranoia)?;
    post(page, &form.action, form.fields, form.method)?;
    Ok(key)
}

/// Decrypt `ciphertext` with the key carried in `location`'s fragment.
pub fn open_paste(location: &str, ciphertext: &str) -> Result<String> {
    let key = key_from_location(location)?;
    let envelope = Envelope::from_json(ciphertext)?;
    crypto::decrypt(&key, &envelope)
}

/// Decrypt the page's published ciphertext and write the plaintext into the
/// output element.
pub fn do_decrypt<P: Page + ?Sized>(page: &mut P) -> Result<()> {
    let location = page.location()?;
    let ciphertext = page.element_text(RAW_ELEMENT_ID)?;
    let plaintext = open_paste(&location, &ciphertext)?;
    tracing::debug!(bytes = plaintext.len(), "decrypted paste");
    page.set_element_text(OUTPUT_ELEMENT_ID, &plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use secrecy::ExposeSecret;

    fn paste_fields(body: &str) -> FormFields {
        vec![("title", "notes"), (PASTE_FIELD, body), ("expiry", "1d")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_seal_form_replaces_only_paste() {
        let sealed = seal_form(paste_fields("hello"), Paranoia::default()).unwrap();
        let fields = &sealed.form.fields;

        assert_eq!(fields.get("title"), Some("notes"));
        assert_eq!(fields.get("expiry"), Some("1d"));
        assert_ne!(fields.get(PASTE_FIELD), Some("hello"));
        assert_eq!(fields.len(), 3);

        let envelope = Envelope::from_json(fields.get(PASTE_FIELD).unwrap()).unwrap();
        assert_eq!(crypto::decrypt(&sealed.key, &envelope).unwrap(), "hello");
    }

    #[test]
    fn test_seal_form_action_carries_key() {
        let sealed = seal_form(paste_fields("hello"), Paranoia::default()).unwrap();

        assert_eq!(sealed.form.request_path(), "/");
        assert_eq!(
            sealed.form.fragment(),
            Some(sealed.key.to_base64().expose_secret())
        );
        assert_eq!(sealed.form.method, FormMethod::Post);
    }

    #[test]
    fn test_seal_form_requires_paste_field() {
        let fields: FormFields = vec![("title", "notes")].into_iter().collect();
        assert!(matches!(
            seal_form(fields, Paranoia::default()),
            Err(PasteurError::MissingField(name)) if name == "paste"
        ));
    }

    #[test]
    fn test_do_encrypt_submits_sealed_form() {
        let mut page = MemoryPage::new("/").with_form(PASTE_FORM_ID, paste_fields("body"));
        let key = do_encrypt(&mut page, Paranoia::default()).unwrap();

        let form = page.last_submitted().unwrap();
        assert_eq!(form.fragment(), Some(key.to_base64().expose_secret()));
        assert_eq!(form.fields.get("title"), Some("notes"));
    }

    #[test]
    fn test_do_encrypt_missing_form() {
        let mut page = MemoryPage::new("/");
        assert!(matches!(
            do_encrypt(&mut page, Paranoia::default()),
            Err(PasteurError::ElementNotFound(_))
        ));
        assert!(page.submitted.is_empty());
    }

    #[test]
    fn test_do_decrypt_writes_output() {
        let sealed = seal_form(paste_fields("the body"), Paranoia::default()).unwrap();
        let ciphertext = sealed.form.fields.get(PASTE_FIELD).unwrap().to_string();
        let location = format!("https://paste.example/p/1#{}", sealed.form.fragment().unwrap());

        let mut page = MemoryPage::new(location)
            .with_element(RAW_ELEMENT_ID, ciphertext)
            .with_element(OUTPUT_ELEMENT_ID, "");
        do_decrypt(&mut page).unwrap();

        assert_eq!(page.element_text(OUTPUT_ELEMENT_ID).unwrap(), "the body");
    }

    #[test]
    fn test_do_decrypt_without_fragment_leaves_output() {
        let sealed = seal_form(paste_fields("the body"), Paranoia::default()).unwrap();
        let ciphertext = sealed.form.fields.get(PASTE_FIELD).unwrap().to_string();

        let mut page = MemoryPage::new("https://paste.example/p/1")
            .with_element(RAW_ELEMENT_ID, ciphertext)
            .with_element(OUTPUT_ELEMENT_ID, "untouched");

        assert!(matches!(do_decrypt(&mut page), Err(PasteurError::MissingKey)));
        assert_eq!(page.element_text(OUTPUT_ELEMENT_ID).unwrap(), "untouched");
    }

    #[test]
    fn test_post_uses_requested_method() {
        let mut page = MemoryPage::new("/");
        let fields: FormFields = vec![("q", "1")].into_iter().collect();
        post(&mut page, "/search", fields, FormMethod::Get).unwrap();

        let form = page.last_submitted().unwrap();
        assert_eq!(form.method, FormMethod::Get);
        assert_eq!(form.action, "/search");
    }
}
