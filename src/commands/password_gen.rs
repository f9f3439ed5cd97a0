use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::OsRng;

use tkpass::configtool::Settings;
use tkpass::passgen::{self, ClassRequirement};
use tkpass::securerandom::resolve_bounds;
use tkpass::sentence;
use tkpass::wordlist::wordlist_or_default;

use super::{deliver, OutputArgs};

#[derive(Debug, Args)]
#[command(after_help = "Example:
   tkpass w -n 7 -l 20 -a 10 -u 0
   Generates 7 passwords of 20 characters composed of no capital letters,
   10 lowercase letters, numbers and special characters.")]
pub struct PasswordArgs {
    /// Number of characters in each password; with two numbers the length is random between them
    #[arg(short = 'l', value_name = "LENGTH", num_args = 1..=2)]
    pub length: Vec<usize>,

    /// Number of lowercase letters ('fill' to pad randomly, 'none' to exclude)
    #[arg(short = 'a', value_name = "NUM_LOWERCASE_LETTERS")]
    pub lowercase: Option<ClassRequirement>,

    /// Number of capital letters ('fill' to pad randomly, 'none' to exclude)
    #[arg(short = 'u', value_name = "NUM_UPPER_CASE_LETTERS")]
    pub uppercase: Option<ClassRequirement>,

    /// Number of digits ('fill' to pad randomly, 'none' to exclude)
    #[arg(short = 'd', value_name = "NUM_DIGITS")]
    pub digits: Option<ClassRequirement>,

    /// Number of special symbols ('fill' to pad randomly, 'none' to exclude)
    #[arg(short = 's', value_name = "NUM_SPECIAL_SYMBOLS")]
    pub special: Option<ClassRequirement>,

    /// Number of passwords to generate
    #[arg(short = 'n', value_name = "GENERATION_NUMBER")]
    pub count: Option<usize>,

    /// Characters that cannot be included in the password
    #[arg(short = 'b', value_name = "BANNED_CHARACTERS", num_args = 1.., allow_hyphen_values = true)]
    pub banned: Vec<String>,

    /// Also print a sentence built from the password to help remember it
    #[arg(short = 'p', long = "passphrase", value_name = "WORDLIST_FILE", num_args = 0..=1)]
    pub passphrase: Option<Option<PathBuf>>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn generate_random(args: PasswordArgs, settings: &Settings) -> Result<()> {
    let mut rng = OsRng;
    let mut spec = settings.password.to_spec();
    if let Some(lowercase) = args.lowercase {
        spec.lowercase = lowercase;
    }
    if let Some(uppercase) = args.uppercase {
        spec.uppercase = uppercase;
    }
    if let Some(digits) = args.digits {
        spec.digits = digits;
    }
    if let Some(special) = args.special {
        spec.special = special;
    }
    if !args.banned.is_empty() {
        spec.banned = args.banned.iter().flat_map(|s| s.chars()).collect();
    }
    if let Some(length) = resolve_bounds(&args.length, &mut rng)? {
        spec.total_length = Some(length);
    }
    let count = args.count.unwrap_or(settings.default_generation_count);
    tracing::debug!(total_length = ?spec.total_length, count, banned = spec.banned.len(), "generating passwords");

    let result = passgen::generate_passwords(&spec, count, &mut rng)
        .context("Failed to generate password")?;

    if !args.output.hide {
        println!("{}", result);
        if let Some(wordlist) = &args.passphrase {
            let path = wordlist
                .as_deref()
                .or(settings.password.sentence_wordlist.as_deref());
            let words = wordlist_or_default(path)?;
            let sentence = sentence::reconstruct_sentence(&result, &words, &mut rng)
                .context("Failed to build a sentence from the password")?;
            println!("\n{}", sentence);
        }
    }

    deliver(&result, &args.output, settings)
}
