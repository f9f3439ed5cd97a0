//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-06-30
// Version : 1.1.0
// License : Mulan PSL v2
//
// A password toolkit written in Rust.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tkpass::configtool::load_settings;
use tkpass::logger::init_cli_logger;

mod commands;

use commands::check::CheckArgs;
use commands::passphrase::PassphraseArgs;
use commands::password_gen::PasswordArgs;
use commands::sentence::SentenceArgs;

#[derive(Debug, Parser)]
#[command(name = "tkpass", version)]
#[command(about = "A password toolkit", long_about = None)]
struct Cli {
    /// Path to a configuration file (default: {config dir}/tkpass/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Test the strength of a password
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Generate a cryptographically random password
    #[command(visible_alias = "w")]
    Password(PasswordArgs),

    /// Generate a cryptographically random passphrase
    #[command(visible_alias = "p")]
    Passphrase(PassphraseArgs),

    /// Generate a sentence-based password
    #[command(visible_alias = "s")]
    Sentence(SentenceArgs),

    /// Show safety recommendations and sources
    Doc,

    /// Show the effective configuration
    Config {
        /// Only print the configuration file location
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Check(args) => commands::check::test_password(args, &settings),
        Commands::Password(args) => commands::password_gen::generate_random(args, &settings),
        Commands::Passphrase(args) => commands::passphrase::generate_memorable(args, &settings),
        Commands::Sentence(args) => commands::sentence::generate_from_sentence(args, &settings),
        Commands::Doc => {
            commands::doc::show_documentation();
            Ok(())
        }
        Commands::Config { path } => {
            commands::config::show_config(&settings, cli.config.as_deref(), path)
        }
    }
}
