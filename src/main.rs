use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::EnvFilter;

use pwd_check::report::{EMPTY_INPUT_MESSAGE, render_report, render_tips};
use pwd_check::{
    DEFAULT_LENGTH, DEFAULT_WORDLIST_PATH, DEFAULT_WORDLIST_URL, Evaluator, WordSet,
    acquire_wordlist, generate_password, generate_strong_password, load_or_empty,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check password strength and generate passwords", long_about = None)]
struct Cli {
    /// Dictionary word list, one word per line
    #[arg(long, global = true, env = "PWD_WORDLIST_PATH", default_value = DEFAULT_WORDLIST_PATH)]
    wordlist: PathBuf,

    /// Where to download the word list from when it is missing
    #[arg(long, global = true, env = "PWD_WORDLIST_URL", default_value = DEFAULT_WORDLIST_URL)]
    wordlist_url: String,

    /// Never download the word list
    #[arg(long, global = true)]
    no_fetch: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a password (prompted for, or read from stdin, when omitted)
    Check {
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
    },
    /// Generate a random password and evaluate it
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
        length: usize,
        /// Retry until the password passes every rule
        #[arg(long)]
        strong: bool,
    },
    /// Show what makes a strong password
    Tips,
}

fn load_words(cli: &Cli) -> WordSet {
    if cli.no_fetch {
        return load_or_empty(&cli.wordlist);
    }
    acquire_wordlist(&cli.wordlist, &cli.wordlist_url).unwrap_or_else(|e| {
        tracing::warn!("Dictionary check disabled: {}", e);
        WordSet::empty()
    })
}

/// Masked prompt; the toggle reveals what was typed.
fn password_prompt() -> Password<'static> {
    Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .without_confirmation()
}

fn read_password_line<R: BufRead>(mut reader: R) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_password() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return password_prompt()
            .prompt()
            .context("failed to read password");
    }
    read_password_line(stdin.lock())
}

/// Loads the dictionary, then obtains the password and renders its report.
///
/// The word list is ready before the user is asked for anything.
fn check_report<L, R>(load: L, read: R) -> anyhow::Result<String>
where
    L: FnOnce() -> WordSet,
    R: FnOnce() -> anyhow::Result<String>,
{
    let evaluator = Evaluator::new(load());

    let password = read()?;
    if password.is_empty() {
        bail!(EMPTY_INPUT_MESSAGE);
    }
    let password = SecretString::new(password.into());

    Ok(render_report(&evaluator.evaluate(&password)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Tips => {
            print!("{}", render_tips());
        }
        Command::Check { password } => {
            let report = check_report(
                || load_words(&cli),
                || match password {
                    Some(p) => Ok(p.clone()),
                    None => read_password(),
                },
            )?;
            print!("{}", report);
        }
        Command::Generate { length, strong } => {
            let evaluator = Evaluator::new(load_words(&cli));
            let password = if *strong {
                generate_strong_password(*length, &evaluator)?
            } else {
                generate_password(*length)
            };

            println!("{}", password.expose_secret());
            println!();
            print!("{}", render_report(&evaluator.evaluate(&password)));
        }
    }

    Ok(())
}
