use pasteur_core::page::PASTE_FIELD;
use pasteur_core::{do_encrypt, FormFields, HiddenForm};
use secrecy::ExposeSecret;

use crate::app::AppContext;
use crate::cli::EncryptArgs;
use crate::errors::CliError;
use crate::helpers::{parse_field, read_paste_body};
use crate::page::CliPage;
use crate::transport::HttpTransport;
use crate::ui::theme::bold;
use crate::ui::{badge, kv, print_warning, Badge, Spinner};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let paranoia = ctx.paranoia(args.paranoia)?;
    let ui = ctx.ui_context(args.json);
    let fields = build_fields(
        read_paste_body(args.body.clone(), args.file.as_deref(), args.no_input)?,
        &args.fields,
    )?;
    if fields.get(PASTE_FIELD).is_some_and(|body| body.trim().is_empty()) {
        print_warning(&ui, "Paste body is empty");
    }

    let transport = HttpTransport::new(ctx.server_url())?;
    let mut page = CliPage::compose(fields, (!args.dry_run).then_some(&transport));

    let spinner = (!args.dry_run).then(|| Spinner::start(&ui, "Submitting paste"));
    let result = do_encrypt(&mut page, paranoia);
    if let Some(spinner) = spinner {
        spinner.finish();
    }
    let key = result?;

    let form = page
        .submitted()
        .ok_or_else(|| anyhow::anyhow!("No form was submitted"))?;
    let link = if args.dry_run {
        transport.resolve(&form.action)?.to_string()
    } else {
        page.current_location().to_string()
    };

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "link": link,
            "key": key.to_base64().expose_secret(),
            "submitted": !args.dry_run,
            "action": form.action,
            "method": form.method,
            "fields": fields_json(form),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.dry_run {
        print!("{}", form.to_html());
        println!("{}", kv(&ui, "Link", &link));
        return Ok(());
    }

    if ui.mode.is_pretty() {
        if !ctx.quiet {
            println!("{}", badge(&ui, Badge::Ok, "Paste submitted"));
        }
        println!("{}", kv(&ui, "Link", &bold(&link, ui.color)));
    } else {
        println!("{}", link);
    }
    Ok(())
}

/// The paste first, then extra fields in the order given.
fn build_fields(body: String, raw_fields: &[String]) -> anyhow::Result<FormFields> {
    let mut fields = FormFields::new();
    fields.insert(PASTE_FIELD, body);
    for raw in raw_fields {
        let (name, value) = parse_field(raw)?;
        if name == PASTE_FIELD {
            return Err(CliError::invalid_input_with_hint(
                format!("--field {} would replace the paste body", PASTE_FIELD),
                "Use --body or --file for the paste itself.",
            )
            .into());
        }
        fields.insert(name, value);
    }
    Ok(fields)
}

fn fields_json(form: &HiddenForm) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = form
        .fields
        .iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
        .collect();
    serde_json::Value::Object(map)
}
