pub mod check;
pub mod config;
pub mod doc;
pub mod passphrase;
pub mod password_gen;
pub mod sentence;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rpassword::read_password;

use tkpass::configtool::Settings;
use tkpass::exportfile::export_file;
use tkpass::setclip::copy_to_clipboard;

/// Options shared by every generating command.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Copy the result to the clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Do not display the result
    #[arg(short = 'H', long)]
    pub hide: bool,

    /// Export the result to a file (the configured default file when FILE is omitted)
    #[arg(short = 'o', long, value_name = "FILE", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,
}

/// Copies and exports a result as requested. Printing is left to the caller.
pub fn deliver(result: &str, output: &OutputArgs, settings: &Settings) -> Result<()> {
    if output.copy || settings.auto_copy_generated {
        copy_to_clipboard(result)?;
    }
    let path = match &output.output {
        Some(Some(path)) => Some(path.clone()),
        Some(None) => Some(settings.default_outfile.clone()),
        None => None,
    };
    if let Some(path) = path {
        if export_file(result, &path, confirm_overwrite)? {
            println!("File successfully written.");
        }
    }
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    let answer = prompt_input(&format!(
        "\n{} already exists. Do you want to overwrite it? (N/y) ",
        path.display()
    ))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// 提示用户输入
pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    let mut input = String::new();
    io::stdin().read_line(&mut input).context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// 提示用户输入密码
pub fn read_password_from_stdin(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    read_password().context("Failed to read password")
}
