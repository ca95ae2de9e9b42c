//! Vinculum CLI entry point.
//!
//! With no subcommand the interactive REPL starts; the subcommands run a
//! single conversion and exit.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vinculum_numeral::{decode, encode, validate};
use vinculum_runtime::{Repl, ReplConfig};

/// CLI configuration parsed from arguments.
#[derive(Parser)]
#[command(name = "vinculum", version, about = "Roman numeral converter")]
struct CliArgs {
    /// One-shot conversion; omit to start the REPL
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging to stderr
    #[arg(long, default_value_t = false)]
    log: bool,

    /// Do not print the REPL banner
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// Disable ANSI colors in REPL output
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// REPL prompt
    #[arg(long, default_value = ">> ")]
    prompt: String,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Roman numeral to an integer
    Decode {
        /// Numeral, e.g. MMXXIV or _M_D_C_L_X_VMDCLXVI
        text: String,
    },
    /// Convert an integer to a Roman numeral
    Encode {
        /// Integer up to 3999999
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
    /// Check whether text is a well-formed Roman numeral
    Validate {
        /// Candidate numeral
        text: String,
    },
}

impl CliArgs {
    fn repl_config(&self) -> ReplConfig {
        ReplConfig::default()
            .with_prompt(self.prompt.clone())
            .with_banner(!self.no_banner)
            .with_color(!self.no_color)
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.log);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber when `--log` is given or `RUST_LOG` is set.
fn init_logging(enabled: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if enabled => EnvFilter::new("debug"),
        Err(_) => return,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &CliArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match &args.command {
        Some(Command::Decode { text }) => {
            let value = decode(text)?;
            println!("{value}");
        }
        Some(Command::Encode { value }) => {
            let numeral = encode(*value)?;
            println!("{numeral}");
        }
        Some(Command::Validate { text }) => {
            let valid = validate(text);
            println!("{valid}");
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            let mut repl = Repl::new()?.with_config(args.repl_config());
            repl.run()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
