use pasteur_core::fragment::{key_from_location, strip_fragment};
use pasteur_core::page::RAW_ELEMENT_ID;
use pasteur_core::{do_decrypt, PasteurError};
use url::Url;

use crate::app::AppContext;
use crate::cli::DecryptArgs;
use crate::errors::CliError;
use crate::helpers::read_ciphertext;
use crate::html::element_text_by_id;
use crate::page::CliPage;
use crate::transport::HttpTransport;
use crate::ui::{badge, Badge, Spinner};

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    tracing::debug!(link = %strip_fragment(&args.link), "decrypting paste");

    let ciphertext = match args.raw_file.as_deref() {
        Some(path) => read_ciphertext(path)?,
        None => {
            // Fail on a bad link before touching the network.
            key_from_location(&args.link)?;
            let url = Url::parse(&args.link).map_err(|e| {
                CliError::invalid_input_with_hint(
                    format!("Cannot fetch \"{}\": {}", args.link, e),
                    "Pass an absolute link, or supply the ciphertext with --raw-file.",
                )
            })?;

            let transport = HttpTransport::new(ctx.server_url())?;
            let spinner = Spinner::start(&ui, "Fetching paste");
            let html = transport.fetch(&url);
            spinner.finish();
            extract_ciphertext(&html?)?
        }
    };

    let mut page = CliPage::view(args.link.as_str(), ciphertext);
    do_decrypt(&mut page)?;

    match args.output.as_deref() {
        Some(path) => {
            std::fs::write(path, page.output())
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
            tracing::debug!(path, "wrote plaintext");
            if !ctx.quiet {
                eprintln!("{}", badge(&ui, Badge::Ok, &format!("Decrypted to {}", path)));
            }
        }
        None => print!("{}", page.output()),
    }
    Ok(())
}

fn extract_ciphertext(html: &str) -> anyhow::Result<String> {
    element_text_by_id(html, RAW_ELEMENT_ID)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| PasteurError::ElementNotFound(RAW_ELEMENT_ID.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ciphertext_from_page() {
        let html = r#"<html><body><pre id="raw">
{&quot;v&quot;:1}
</pre><div id="output"></div></body></html>"#;

        assert_eq!(extract_ciphertext(html).unwrap(), r#"{"v":1}"#);
    }

    #[test]
    fn test_extract_ciphertext_missing_element() {
        let err = extract_ciphertext("<html><body></body></html>").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PasteurError>(),
            Some(PasteurError::ElementNotFound(id)) if id == "raw"
        ));
    }
}
