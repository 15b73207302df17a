//! Gadgetry CLI - Session token and product card tools.
//!
//! # Usage
//!
//! ```bash
//! # Store a credential issued by the commerce platform
//! gadgetry token set --token abc --refresh-token def --expires-in 172800
//!
//! # Inspect the stored credential
//! gadgetry token status
//!
//! # Forget the stored credential
//! gadgetry token clear
//!
//! # Render the card for a product's silver variant
//! gadgetry product card --file product.json --variant 2 --cart cart.json
//! ```
//!
//! # Commands
//!
//! - `token` - Show, store and clear the session credential
//! - `product` - Resolve product card view state from a product JSON file
//!
//! Output is JSON on stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use gadgetry_storefront::config::StorefrontConfig;
use gadgetry_storefront::error::Result;
use gadgetry_storefront::telemetry::{self, LogFormat};

mod commands;

#[derive(Parser)]
#[command(name = "gadgetry")]
#[command(author, version, about = "Gadgetry storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the stored session credential
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// Resolve product card view state
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Print the stored credential
    Show,
    /// Print expiry and refresh status of the stored credential
    Status,
    /// Store a credential (expiry is extended by ten days)
    Set {
        /// Access token
        #[arg(short, long)]
        token: String,

        /// Refresh token
        #[arg(short, long, default_value = "")]
        refresh_token: String,

        /// Expiry in epoch milliseconds
        #[arg(long, conflicts_with = "expires_in", required_unless_present = "expires_in")]
        expires_at: Option<i64>,

        /// Expiry in seconds from now
        #[arg(long)]
        expires_in: Option<i64>,
    },
    /// Remove the stored credential
    Clear,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Build the product card for one variant
    Card {
        /// Product JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Active variant ID (1 is the main variant)
        #[arg(short, long, default_value_t = 1)]
        variant: i32,

        /// Cart lines JSON file
        #[arg(short, long)]
        cart: Option<PathBuf>,
    },
    /// List the product's distinct colour swatches
    Colors {
        /// Product JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<()> {
    match cli.command {
        Commands::Token { action } => {
            let tokens = config.token_service();
            match action {
                TokenAction::Show => emit(&commands::token::show(&tokens))?,
                TokenAction::Status => {
                    emit(&commands::token::status(&tokens, chrono::Utc::now()))?;
                }
                TokenAction::Set {
                    token,
                    refresh_token,
                    expires_at,
                    expires_in,
                } => {
                    let expiration =
                        commands::token::Expiration::from_args(expires_at, expires_in)?;
                    let status = commands::token::set(
                        &tokens,
                        token,
                        refresh_token,
                        expiration,
                        chrono::Utc::now(),
                    )?;
                    emit(&status)?;
                }
                TokenAction::Clear => commands::token::clear(&tokens)?,
            }
        }
        Commands::Product { action } => {
            let colors = config.load_color_table()?;
            match action {
                ProductAction::Card {
                    file,
                    variant,
                    cart,
                } => {
                    let view = commands::product::card(&colors, &file, variant, cart.as_deref())?;
                    emit(&view)?;
                }
                ProductAction::Colors { file } => {
                    emit(&commands::product::colors(&colors, &file)?)?;
                }
            }
        }
    }
    Ok(())
}

/// Write a command result to stdout as pretty JSON.
#[allow(clippy::print_stdout)]
fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
