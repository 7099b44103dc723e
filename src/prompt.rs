//  ____                 _____
// |  _ \ __ _ ___ ___  |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __| | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \ |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/ |_|  \___/|_|  \__, |\___|
//                                     |___/
//
// Date : 2026-08-13
// Version : 0.1.0
// License : MIT
//
// Interactive prompt helpers

use std::io::{self, Write};

/// Print `prompt` and read one trimmed line from stdin.
pub fn prompt_input(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Interpret a yes/no answer. Empty or unrecognized input falls back to
/// `default`.
pub fn parse_yes_no(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Parse a positive integer. Empty, non-numeric, or zero input falls back to
/// `default` instead of propagating an error.
pub fn parse_positive(input: &str, default: usize) -> usize {
    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => default,
    }
}
