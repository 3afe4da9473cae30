//! Application context: CLI flags merged over the config file.

use pasteur_core::Paranoia;

use crate::cli::Cli;
use crate::config::{load_config, PasteurConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

pub struct AppContext {
    pub config: PasteurConfig,
    pub quiet: bool,
    pub no_color: bool,
}

impl AppContext {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = load_config()?;
        if let Some(server) = cli.server.as_deref() {
            config.server.url = server.to_string();
        }
        Ok(Self {
            config,
            quiet: cli.quiet,
            no_color: cli.no_color,
        })
    }

    /// Context that ignores any existing config file, for commands that
    /// write one.
    pub fn without_config(cli: &Cli) -> Self {
        let mut config = PasteurConfig::default();
        if let Some(server) = cli.server.as_deref() {
            config.server.url = server.to_string();
        }
        Self {
            config,
            quiet: cli.quiet,
            no_color: cli.no_color,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.config.server.url
    }

    /// Paranoia from the command line if given, otherwise from config.
    pub fn paranoia(&self, flag: Option<u8>) -> anyhow::Result<Paranoia> {
        match flag {
            Some(level) => Paranoia::new(level).map_err(|e| {
                CliError::invalid_input_with_hint(e.to_string(), "Use a level from 0 to 10.")
                    .into()
            }),
            None => Ok(self.config.crypto.paranoia),
        }
    }

    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.no_color, self.quiet)
    }
}
