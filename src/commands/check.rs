use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tkpass::configtool::Settings;
use tkpass::setclip::read_clipboard;
use tkpass::strength::{assess_password_strength, StrengthReport};
use tkpass::wordlist::{load_dictionaries, load_named};

use super::read_password_from_stdin;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The password to check
    #[arg(short = 'p', long, group = "input")]
    pub password: Option<String>,

    /// Ask for the password without echoing it (default)
    #[arg(short = 'g', long, group = "input")]
    pub getpass: bool,

    /// Use the clipboard as password
    #[arg(short = 'c', long, group = "input")]
    pub clipboard: bool,

    /// Additional information, for example a name or a date of birth
    #[arg(short = 'i', long, num_args = 1..)]
    pub info: Vec<String>,

    /// Additional word list files to load
    #[arg(short = 'w', long, value_name = "FILE", num_args = 1..)]
    pub wordlist: Vec<PathBuf>,
}

pub fn test_password(args: CheckArgs, settings: &Settings) -> Result<()> {
    let password = if let Some(password) = args.password {
        password
    } else if args.clipboard {
        read_clipboard()?
    } else {
        let password = read_password_from_stdin("Password: ")?;
        println!();
        password
    };

    let mut dictionaries = load_dictionaries(&settings.dictionary_dir()?)?;
    for path in &args.wordlist {
        dictionaries.push(load_named(path)?);
    }
    tracing::debug!(dictionaries = dictionaries.len(), "dictionaries loaded");

    let report = assess_password_strength(&password, &args.info, &dictionaries)
        .context("Failed to check the password")?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &StrengthReport) {
    println!("    {} ({}/4)", report.rating, report.score);

    println!("\nEstimated time needed to guess the password: ");
    println!("    Fast hashing with many processors (1e10/s) :  {}", report.crack_times.offline_fast_hashing);
    println!("    Slow hashing with many processors (1e4/s) :   {}", report.crack_times.offline_slow_hashing);
    println!("    Online attack without throttling (10/s) :     {}", report.crack_times.online_no_throttling);
    println!("    Online attack with throttling (100/h) :       {}", report.crack_times.online_throttling);

    println!("\nComments and recommendations: ");
    let comments: Vec<&str> = report
        .warning
        .iter()
        .chain(report.suggestions.iter())
        .chain(report.advice.iter())
        .map(String::as_str)
        .collect();
    if comments.is_empty() {
        println!("    No comments available.");
    }
    for comment in comments {
        println!("    {}", comment);
    }

    println!("\nExposure report:");
    if report.exposures.is_empty() {
        println!("    No matches found.");
    }
    for exposure in &report.exposures {
        println!("    '{}' found in {}", exposure.word, exposure.dictionary);
    }
}
