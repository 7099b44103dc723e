//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-15
// Version : 0.1.0
// License : MIT
//
// A policy-driven random password generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use passforge::commands;
use passforge::passgen::Policy;
use passforge::setclip;

#[derive(Debug, Parser)]
#[command(name = "passforge")]
#[command(about = "A policy-driven random password generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random passwords from command-line flags
    Gen(GenArgs),

    /// Run the interactive generation session (the default)
    Interactive,

    /// Test password strength and entropy
    Testpass(TestpassArgs),
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Exclude visually ambiguous characters (O, 0, I, l, 1)
    #[arg(short = 'x', long, default_value_t = false)]
    exclude_ambiguous: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Append generated passwords to this file
    #[arg(short, long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Copy the password to the clipboard (single password only)
    #[arg(short, long, default_value_t = false)]
    copy: bool,
}

impl From<&GenArgs> for Policy {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            include_upper: !args.no_uppercase,
            include_lower: !args.no_lowercase,
            include_digits: !args.no_digits,
            include_symbols: !args.no_symbols,
            exclude_ambiguous: args.exclude_ambiguous,
        }
    }
}

#[derive(Debug, Args)]
struct TestpassArgs {
    /// Password to test
    password: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Gen(args)) => {
            let policy = Policy::from(&args);
            commands::password_gen::run(policy, args.count, args.save, args.copy)
        }
        Some(Command::Testpass(args)) => commands::testpass::run(&args.password),
        Some(Command::Interactive) | None => {
            commands::interactive::run(setclip::clipboard_available())
        }
    }
}
