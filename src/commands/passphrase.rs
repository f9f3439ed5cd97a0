use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::OsRng;

use tkpass::configtool::Settings;
use tkpass::passphrase::{self, PassphraseSpec};
use tkpass::securerandom::resolve_bounds;
use tkpass::wordlist::wordlist_or_default;

use super::{deliver, OutputArgs};

#[derive(Debug, Args)]
#[command(after_help = "Example:
   tkpass p -n 2 -l 6 -s '-' -o 'passphrase.txt'
   Generate and export to a file 2 passphrases of 6 words separated by a dash.")]
pub struct PassphraseArgs {
    /// Character(s) between words
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Number of passphrases to generate
    #[arg(short = 'n', long = "generation-number")]
    pub count: Option<usize>,

    /// Number of words in each passphrase; with two numbers the count is random between them
    #[arg(short = 'l', long = "words-number", num_args = 1..=2)]
    pub words_number: Vec<usize>,

    /// Capitalize the first letter of the first word drawn
    #[arg(short = 'u')]
    pub capitalize: bool,

    /// Number of symbols
    #[arg(short = 'w', value_name = "NUM_SYMBOLS", default_value_t = 0)]
    pub symbols: usize,

    /// Number of digits
    #[arg(short = 'd', value_name = "NUM_DIGITS", default_value_t = 0)]
    pub digits: usize,

    /// List of words to be used for the generation of the passphrase
    #[arg(short = 'i', long = "wordlist", value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn generate_memorable(args: PassphraseArgs, settings: &Settings) -> Result<()> {
    let mut rng = OsRng;
    let path = args
        .wordlist
        .as_deref()
        .or(settings.passphrase.wordlist.as_deref());
    let words = wordlist_or_default(path)?;

    let word_count = resolve_bounds(&args.words_number, &mut rng)?
        .unwrap_or(settings.passphrase.word_count);
    let spec = PassphraseSpec {
        word_count,
        separator: args
            .separator
            .unwrap_or_else(|| settings.passphrase.separator.clone()),
        digits: args.digits,
        symbols: args.symbols,
        capitalize: args.capitalize,
        words,
    };
    let count = args.count.unwrap_or(settings.default_generation_count);
    tracing::debug!(word_count, count, words = spec.words.len(), "generating passphrases");

    let result = passphrase::generate_passphrases(&spec, count, &mut rng)
        .context("Failed to generate passphrase")?;

    if !args.output.hide {
        println!("{}", result);
    }
    deliver(&result, &args.output, settings)
}
