use pasteur_core::PasteKey;
use secrecy::ExposeSecret;

use crate::app::AppContext;
use crate::cli::KeygenArgs;

pub fn handle_keygen(ctx: &AppContext, args: &KeygenArgs) -> anyhow::Result<()> {
    let paranoia = ctx.paranoia(args.paranoia)?;
    let key = PasteKey::generate(paranoia)?;
    println!("{}", key.to_base64().expose_secret());
    Ok(())
}
