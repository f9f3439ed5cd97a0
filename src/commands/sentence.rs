use anyhow::{Context, Result};
use clap::Args;

use tkpass::configtool::Settings;
use tkpass::sentence::derive_password;

use super::{deliver, OutputArgs};

#[derive(Debug, Args)]
#[command(after_help = "Example:
   tkpass s 'Lorem ipsum dolor 66 sit amet!' -c
   Generate and copy the password created using the sentence given as an argument.")]
pub struct SentenceArgs {
    /// Sentence
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn generate_from_sentence(args: SentenceArgs, settings: &Settings) -> Result<()> {
    let result = derive_password(&args.sentence)
        .context("Failed to build a password from the sentence")?;
    if !args.output.hide {
        println!("{}", result);
    }
    deliver(&result, &args.output, settings)
}
