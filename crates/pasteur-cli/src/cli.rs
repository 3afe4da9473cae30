use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pasteur_core::VERSION;

/// Pasteur - encrypt pastes locally, share the key in the link
#[derive(Parser)]
#[command(name = "pasteur")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Pastebin server base URL
    #[arg(short, long, global = true, env = "PASTEUR_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),

    /// Generate a paste key
    Keygen(KeygenArgs),

    /// Encrypt a paste and submit it
    Encrypt(EncryptArgs),

    /// Decrypt a paste from its link
    Decrypt(DecryptArgs),

    /// Show the parameters of an encrypted paste without decrypting it
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Default paranoia level (0-10)
    #[arg(long)]
    pub paranoia: Option<u8>,
}

/// Arguments for the `keygen` command
#[derive(Args)]
pub struct KeygenArgs {
    /// Paranoia level (0-10)
    #[arg(long)]
    pub paranoia: Option<u8>,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Paste body (overrides --file, stdin and editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Read the paste body from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "body")]
    pub file: Option<String>,

    /// Extra form field sent alongside the paste
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Paranoia level (0-10)
    #[arg(long)]
    pub paranoia: Option<u8>,

    /// Print the form and link instead of submitting
    #[arg(long)]
    pub dry_run: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Paste link including the #key fragment
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Read the ciphertext from a file ("-" for stdin) instead of fetching
    #[arg(long, value_name = "PATH")]
    pub raw_file: Option<String>,

    /// Write the plaintext to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Read the ciphertext from a file ("-" or omitted for stdin)
    #[arg(long, value_name = "PATH")]
    pub raw_file: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
