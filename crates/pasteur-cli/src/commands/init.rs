use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{resolve_config_path, write_config, PasteurConfig};
use crate::errors::CliError;
use crate::ui::{badge, kv, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = resolve_config_path()?;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists: {}", path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let paranoia = ctx.paranoia(args.paranoia)?;
    let config = PasteurConfig::new(ctx.server_url().to_string(), paranoia);
    write_config(&path, &config)?;
    tracing::debug!(path = %path.display(), "wrote config");

    let ui = ctx.ui_context(false);
    if !ctx.quiet {
        println!("{}", badge(&ui, Badge::Ok, "Wrote config"));
        println!("{}", kv(&ui, "Path", &path.display().to_string()));
        println!("{}", kv(&ui, "Server", &config.server.url));
    }
    Ok(())
}
