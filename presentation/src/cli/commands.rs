//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for atelier-contact
#[derive(Parser, Debug)]
#[command(name = "atelier-contact")]
#[command(author, version, about = "Contact form relay for a makeup artist's portfolio")]
#[command(long_about = r#"
atelier-contact accepts project inquiries and relays them to the artist's
mailbox through a transactional-email provider.

Two modes:
1. serve   Run the HTTP endpoint (POST /api/contact, GET /health)
2. form    Fill in the four-step inquiry form in the terminal and submit it

Configuration files are loaded from (in priority order):
1. --config <path>                           Explicit config file
2. ./atelier-contact.toml                    Project-level config
3. ~/.config/atelier-contact/config.toml     Global config
Environment variables prefixed with ATELIER_ override all files
(e.g. ATELIER_SERVER__BIND_ADDRESS=0.0.0.0:8080).

Example:
  RESEND_API_KEY=re_... CONTACT_EMAIL=studio@example.com atelier-contact serve
  atelier-contact form --endpoint http://localhost:3000/api/contact
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the contact endpoint
    Serve {
        /// Address to bind (overrides server.bind_address)
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Fill in and submit an inquiry from the terminal
    Form {
        /// Contact endpoint URL (overrides client.endpoint)
        #[arg(short, long, value_name = "URL")]
        endpoint: Option<String>,

        /// Suppress the sending spinner
        #[arg(short, long)]
        quiet: bool,
    },
}
