use pasteur_core::crypto::{decrypt, encrypt};
use pasteur_core::fragment::{fragment_of, key_from_location};
use pasteur_core::page::{OUTPUT_ELEMENT_ID, PASTE_FIELD, PASTE_FORM_ID, RAW_ELEMENT_ID};
use pasteur_core::{
    do_decrypt, do_encrypt, open_paste, Envelope, FormFields, MemoryPage, Page, Paranoia,
    PasteKey, PasteurError,
};
use secrecy::ExposeSecret;

fn compose_page(body: &str) -> MemoryPage {
    let fields: FormFields = vec![
        ("title", "build log"),
        (PASTE_FIELD, body),
        ("syntax", "plain"),
        ("expire", "600"),
    ]
    .into_iter()
    .collect();
    MemoryPage::new("https://paste.example/").with_form(PASTE_FORM_ID, fields)
}

#[test]
fn test_round_trip_through_pages() {
    let body = "error[E0382]: borrow of moved value: `x`\n  --> src/main.rs:4:20\n";
    let mut compose = compose_page(body);

    do_encrypt(&mut compose, Paranoia::default()).expect("encrypt should succeed");
    let submitted = compose.last_submitted().expect("a form should be submitted");

    // The server publishes the ciphertext; the browser keeps the fragment
    // across the redirect to the paste page.
    let fragment = submitted.fragment().expect("action should carry a fragment");
    let mut view = MemoryPage::new(format!("https://paste.example/p/9f2c#{}", fragment))
        .with_element(RAW_ELEMENT_ID, submitted.fields.get(PASTE_FIELD).unwrap())
        .with_element(OUTPUT_ELEMENT_ID, "");

    do_decrypt(&mut view).expect("decrypt should succeed");
    assert_eq!(view.element_text(OUTPUT_ELEMENT_ID).unwrap(), body);
}

#[test]
fn test_successive_encryptions_use_different_keys() {
    let mut page = compose_page("same body");

    let first = do_encrypt(&mut page, Paranoia::default()).unwrap();
    let second = do_encrypt(&mut page, Paranoia::default()).unwrap();

    assert_ne!(first.as_bytes(), second.as_bytes());
    assert_ne!(page.submitted[0].action, page.submitted[1].action);
}

#[test]
fn test_form_fidelity() {
    let mut page = compose_page("body");
    do_encrypt(&mut page, Paranoia::default()).unwrap();

    let original = page.form_fields(PASTE_FORM_ID).unwrap();
    let submitted = &page.last_submitted().unwrap().fields;

    assert_eq!(submitted.len(), original.len());
    for ((sent_name, sent_value), (name, value)) in submitted.iter().zip(original.iter()) {
        assert_eq!(sent_name, name);
        if name == PASTE_FIELD {
            assert_ne!(sent_value, value);
            assert!(Envelope::from_json(sent_value).is_ok());
        } else {
            assert_eq!(sent_value, value);
        }
    }
}

#[test]
fn test_fragment_is_encoding_of_encryption_key() {
    let mut page = compose_page("body");
    let key = do_encrypt(&mut page, Paranoia::new(10).unwrap()).unwrap();
    let form = page.last_submitted().unwrap();

    assert_eq!(form.action, format!("/#{}", key.to_base64().expose_secret()));
    assert_eq!(
        fragment_of(&form.action).as_deref(),
        Some(key.to_base64().expose_secret())
    );

    let envelope = Envelope::from_json(form.fields.get(PASTE_FIELD).unwrap()).unwrap();
    let recovered = key_from_location(&form.action).unwrap();
    assert_eq!(decrypt(&recovered, &envelope).unwrap(), "body");
}

#[test]
fn test_mismatched_key_is_an_error() {
    let key = PasteKey::generate(Paranoia::default()).unwrap();
    let other = PasteKey::generate(Paranoia::default()).unwrap();
    let ciphertext = encrypt(&key, "secret").unwrap().to_json().unwrap();

    let location = format!("/#{}", other.to_base64().expose_secret());
    let result = open_paste(&location, &ciphertext);
    assert!(matches!(result, Err(PasteurError::DecryptionFailed)));
}

#[test]
fn test_decrypt_rejects_malformed_inputs() {
    let key = PasteKey::generate(Paranoia::default()).unwrap();
    let ciphertext = encrypt(&key, "secret").unwrap().to_json().unwrap();

    assert!(matches!(
        open_paste("https://paste.example/p/1", &ciphertext),
        Err(PasteurError::MissingKey)
    ));
    assert!(matches!(
        open_paste("https://paste.example/p/1#bm90LWEta2V5", &ciphertext),
        Err(PasteurError::InvalidKey(_))
    ));
    let location = format!("/#{}", key.to_base64().expose_secret());
    assert!(matches!(
        open_paste(&location, "<pre>nothing here</pre>"),
        Err(PasteurError::InvalidEnvelope(_))
    ));
}

#[test]
fn test_page_opens_paste_stored_by_sjcl_defaults() {
    // sjcl.encrypt(key, "hello from sjcl") with key bytes 00..1f
    let ciphertext = r#"{"iv":"ABEiM0RVZneImaq7zN3u/w==","v":1,"iter":10000,"ks":128,"ts":64,"mode":"ccm","adata":"","cipher":"aes","ct":"GiFQFFSZmTd7fRICnsCdF5umxQwMbL4="}"#;
    let location = "https://paste.example/p/7#AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    assert_eq!(open_paste(location, ciphertext).unwrap(), "hello from sjcl");

    let mut page = MemoryPage::new(location)
        .with_element(RAW_ELEMENT_ID, ciphertext)
        .with_element(OUTPUT_ELEMENT_ID, "");
    do_decrypt(&mut page).unwrap();
    assert_eq!(
        page.element_text(OUTPUT_ELEMENT_ID).unwrap(),
        "hello from sjcl"
    );
}
