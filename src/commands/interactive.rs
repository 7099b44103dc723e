//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-14
// Version : 0.1.0
// License : MIT
//
// Interactive generation session

use anyhow::Result;

use crate::history::{self, DEFAULT_HISTORY_FILE};
use crate::passgen::Policy;
use crate::prompt::{parse_positive, parse_yes_no, prompt_input};
use crate::setclip;

/// Interactive flow. `clipboard` reflects the startup capability probe;
/// copying is only offered when it is true and exactly one password was
/// generated.
pub fn run(clipboard: bool) -> Result<()> {
    println!("=== passforge — secure password generator ===");

    let length = parse_positive(
        &prompt_input("Password length (recommended >=12, default 16): ")?,
        16,
    );
    let include_upper = parse_yes_no(&prompt_input("Include UPPERCASE letters? [Y/n]: ")?, true);
    let include_lower = parse_yes_no(&prompt_input("Include lowercase letters? [Y/n]: ")?, true);
    let include_digits = parse_yes_no(&prompt_input("Include digits? [Y/n]: ")?, true);
    let include_symbols = parse_yes_no(&prompt_input("Include symbols? [Y/n]: ")?, true);
    let exclude_ambiguous = parse_yes_no(
        &prompt_input("Exclude ambiguous characters (O, 0, I, l, 1)? [y/N]: ")?,
        false,
    );
    let count = parse_positive(
        &prompt_input("How many passwords to generate? (default 1): ")?,
        1,
    );

    let policy = Policy {
        length,
        include_upper,
        include_lower,
        include_digits,
        include_symbols,
        exclude_ambiguous,
    };

    let passwords = super::generate_batch(&policy, count)?;
    super::display_passwords(&passwords, policy.length);

    if parse_yes_no(
        &prompt_input("\nSave these passwords to a file? [y/N]: ")?,
        false,
    ) {
        let filename = prompt_input(&format!("Enter filename (default {}): ", DEFAULT_HISTORY_FILE))?;
        let filename = if filename.is_empty() {
            DEFAULT_HISTORY_FILE.to_string()
        } else {
            filename
        };
        history::save_history(&passwords, &filename)?;
        println!("Saved to {}", filename);
    }

    if clipboard
        && passwords.len() == 1
        && parse_yes_no(
            &prompt_input("Copy the password to clipboard? [Y/n]: ")?,
            true,
        )
    {
        setclip::copy_to_clipboard(&passwords[0])?;
        println!("Password copied to clipboard!");
    }

    Ok(())
}
