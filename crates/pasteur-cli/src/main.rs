//! Pasteur CLI - encrypt pastes locally and share the key in the link
//!
//! Drives the core handlers against a command-line page: the paste form is
//! built from arguments and submitted over HTTP, and paste pages are fetched
//! and decrypted locally.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod html;
mod logging;
mod page;
mod transport;
mod ui;

use clap::Parser;
use pasteur_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{decrypt, encrypt, init, inspect, keygen, misc};
use crate::errors::classify;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        let ui_ctx = UiContext::from_env(false, cli.no_color, cli.quiet);
        let (code, hint) = classify(&e);
        tracing::debug!(error = ?e, code, "command failed");
        print_error(&ui_ctx, &e.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            // A broken config file must not block rewriting it.
            let ctx = AppContext::without_config(cli);
            init::handle_init(&ctx, args)?;
        }
        Some(Commands::Keygen(args)) => {
            let ctx = AppContext::load(cli)?;
            keygen::handle_keygen(&ctx, args)?;
        }
        Some(Commands::Encrypt(args)) => {
            let ctx = AppContext::load(cli)?;
            encrypt::handle_encrypt(&ctx, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            let ctx = AppContext::load(cli)?;
            decrypt::handle_decrypt(&ctx, args)?;
        }
        Some(Commands::Inspect(args)) => {
            let ctx = AppContext::load(cli)?;
            inspect::handle_inspect(&ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Pasteur v{}", VERSION);
            println!("\nQuickstart:");
            println!("  pasteur init --server https://paste.example");
            println!("  pasteur encrypt --body \"Hello\"");
            println!("  pasteur decrypt 'https://paste.example/p/abc#<key>'");
            println!("\nRun `pasteur --help` for full usage.");
        }
    }

    Ok(())
}
