use pasteur_core::Envelope;

use crate::app::AppContext;
use crate::cli::InspectArgs;
use crate::helpers::read_ciphertext;
use crate::ui::kv_table;

pub fn handle_inspect(ctx: &AppContext, args: &InspectArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let text = read_ciphertext(args.raw_file.as_deref().unwrap_or("-"))?;
    let envelope = Envelope::from_json(&text)?;

    let iv_bytes = envelope.iv_len()?;
    let ct_bytes = envelope.ciphertext_len()?;
    let adata_bytes = envelope.associated_data()?.len();

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "version": envelope.v,
            "cipher": envelope.cipher,
            "mode": envelope.mode,
            "key_size": envelope.ks,
            "tag_size": envelope.ts,
            "iv_bytes": iv_bytes,
            "ciphertext_bytes": ct_bytes,
            "adata_bytes": adata_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let rows = [
        ("Version", envelope.v.to_string()),
        ("Cipher", envelope.cipher.clone()),
        ("Mode", envelope.mode.clone()),
        ("Key Size", format!("{} bits", envelope.ks)),
        ("Tag Size", format!("{} bits", envelope.ts)),
        ("IV", format!("{} bytes", iv_bytes)),
        ("Ciphertext", format!("{} bytes", ct_bytes)),
        ("Adata", format!("{} bytes", adata_bytes)),
    ];
    println!("{}", kv_table(&ui, &rows));
    Ok(())
}
